//! Immutable case tables for regular and transition cells.
//!
//! Both table families share the 16-bit vertex code layout:
//!
//! ```text
//!  15      12 11       8 7        4 3        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ reuse dir│ cache slot│ corner A │ corner B │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! A reuse direction of `0x8` means the cell owns the vertex and stores it
//! in `slot`. Any other value names the negative-neighbor cell (bit 0 = -X,
//! bit 1 = -Y, bit 2 = -Z) whose `slot` already holds it.

pub mod regular;
pub mod transition;

pub use regular::{RegularCellData, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};
pub use transition::{
  TransitionCellData, TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA, TRANSITION_CODE_SAMPLES,
  TRANSITION_LOW_RES_SOURCE, TRANSITION_VERTEX_DATA,
};

use crate::types::Density;

/// Reuse direction marking a vertex owned by the current cell.
pub const OWNED: u8 = 0x8;

/// Decoded 16-bit vertex code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexCode(pub u16);

impl VertexCode {
  #[inline]
  pub const fn reuse_dir(self) -> u8 {
    (self.0 >> 12) as u8
  }

  #[inline]
  pub const fn is_owned(self) -> bool {
    self.reuse_dir() == OWNED
  }

  #[inline]
  pub const fn slot(self) -> usize {
    ((self.0 >> 8) & 0x0F) as usize
  }

  #[inline]
  pub const fn corner_a(self) -> usize {
    ((self.0 >> 4) & 0x0F) as usize
  }

  #[inline]
  pub const fn corner_b(self) -> usize {
    (self.0 & 0x0F) as usize
  }
}

/// 8-bit case code: bit i set when corner i is solid.
#[inline]
pub fn regular_case_code(corners: &[Density; 8]) -> u8 {
  corners
    .iter()
    .enumerate()
    .fold(0u8, |code, (i, &v)| code | (((v < 0) as u8) << i))
}

/// 9-bit case code over the full-resolution face samples.
#[inline]
pub fn transition_case_code(samples: &[Density; 9]) -> u16 {
  TRANSITION_CODE_SAMPLES
    .iter()
    .enumerate()
    .fold(0u16, |code, (bit, &s)| code | (((samples[s] < 0) as u16) << bit))
}
