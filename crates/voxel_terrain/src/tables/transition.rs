//! Transition-cell case tables.
//!
//! A transition cell has 9 full-resolution samples on the chunk face
//! (`0..=8`, row-major in face space) and 4 half-resolution samples
//! (`9..=12`) that copy samples 0, 2, 6 and 8 onto the inner side of the
//! cell. The 9-bit case code takes the full-resolution samples in the order
//! 0, 1, 2, 5, 8, 7, 6, 3, 4 (around the rim, then the center).
//!
//! ```text
//!   6 ── 7 ── 8        11 ─────── 12
//!   │    │    │         │          │
//!   3 ── 4 ── 5         │          │
//!   │    │    │         │          │
//!   0 ── 1 ── 2         9 ──────── 10
//!   full resolution     half resolution
//! ```

/// Triangulation of one transition-cell equivalence class.
#[derive(Clone, Copy, Debug)]
pub struct TransitionCellData {
  /// High nibble = vertex count, low nibble = triangle count.
  geometry_counts: u8,
  /// Vertex indices, 3 per triangle.
  vertex_index: [u8; 27],
}

impl TransitionCellData {
  pub const fn new(geometry_counts: u8, vertex_index: [u8; 27]) -> Self {
    Self {
      geometry_counts,
      vertex_index,
    }
  }

  #[inline]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  #[inline]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Vertex indices of the class triangles.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.vertex_index[..self.triangle_count() * 3]
  }
}

/// Sample feeding each bit of the 9-bit case code.
pub const TRANSITION_CODE_SAMPLES: [usize; 9] = [0, 1, 2, 5, 8, 7, 6, 3, 4];

/// Full-resolution sample each half-resolution sample copies.
pub const TRANSITION_LOW_RES_SOURCE: [usize; 4] = [0, 2, 6, 8];

#[rustfmt::skip]
pub const TRANSITION_CELL_CLASS: [u8; 512] = [
  0x00, 0x01, 0x02, 0x03, 0x01, 0x04, 0x03, 0x03, 0x02, 0x05, 0x06, 0x07, 0x03, 0x08, 0x09, 0x09,
  0x01, 0x0A, 0x05, 0x0B, 0x09, 0x0C, 0x08, 0x08, 0x03, 0x0B, 0x07, 0x0D, 0x03, 0x08, 0x09, 0x09,
  0x02, 0x05, 0x06, 0x07, 0x05, 0x0E, 0x07, 0x07, 0x06, 0x0F, 0x10, 0x11, 0x07, 0x12, 0x13, 0x13,
  0x03, 0x0B, 0x07, 0x0D, 0x08, 0x14, 0x15, 0x15, 0x04, 0x16, 0x0E, 0x17, 0x09, 0x15, 0x08, 0x08,
  0x01, 0x09, 0x05, 0x08, 0x0A, 0x18, 0x0B, 0x08, 0x05, 0x13, 0x0F, 0x12, 0x0B, 0x14, 0x19, 0x15,
  0x04, 0x15, 0x0E, 0x14, 0x15, 0x15, 0x14, 0x08, 0x08, 0x14, 0x12, 0x1A, 0x08, 0x08, 0x15, 0x1B,
  0x03, 0x08, 0x07, 0x15, 0x0B, 0x14, 0x0D, 0x15, 0x07, 0x12, 0x11, 0x1C, 0x0D, 0x1D, 0x1E, 0x14,
  0x03, 0x08, 0x07, 0x15, 0x08, 0x08, 0x15, 0x1B, 0x09, 0x15, 0x13, 0x1F, 0x09, 0x1B, 0x08, 0x03,
  0x02, 0x03, 0x06, 0x09, 0x05, 0x08, 0x07, 0x09, 0x06, 0x07, 0x10, 0x13, 0x07, 0x20, 0x13, 0x21,
  0x05, 0x0B, 0x0F, 0x19, 0x13, 0x14, 0x12, 0x15, 0x07, 0x0D, 0x11, 0x1E, 0x07, 0x15, 0x13, 0x08,
  0x06, 0x07, 0x10, 0x13, 0x0F, 0x12, 0x11, 0x13, 0x10, 0x11, 0x22, 0x23, 0x11, 0x24, 0x23, 0x25,
  0x07, 0x0D, 0x11, 0x1E, 0x12, 0x26, 0x1C, 0x1F, 0x0E, 0x17, 0x27, 0x28, 0x13, 0x14, 0x12, 0x29,
  0x03, 0x03, 0x07, 0x09, 0x0B, 0x08, 0x0D, 0x1B, 0x07, 0x07, 0x11, 0x13, 0x0D, 0x15, 0x1E, 0x08,
  0x08, 0x08, 0x12, 0x15, 0x14, 0x08, 0x1A, 0x1B, 0x18, 0x15, 0x2A, 0x14, 0x15, 0x1B, 0x1F, 0x03,
  0x04, 0x09, 0x0E, 0x08, 0x16, 0x15, 0x17, 0x08, 0x0E, 0x13, 0x27, 0x12, 0x17, 0x1F, 0x28, 0x0C,
  0x09, 0x09, 0x13, 0x08, 0x15, 0x1B, 0x14, 0x03, 0x2B, 0x08, 0x2C, 0x15, 0x08, 0x03, 0x15, 0x01,
  0x01, 0x0A, 0x03, 0x08, 0x0A, 0x16, 0x08, 0x2D, 0x03, 0x0B, 0x1B, 0x15, 0x08, 0x2E, 0x09, 0x09,
  0x0A, 0x2F, 0x0B, 0x30, 0x19, 0x31, 0x14, 0x32, 0x08, 0x30, 0x15, 0x33, 0x08, 0x2E, 0x09, 0x04,
  0x03, 0x0B, 0x1B, 0x15, 0x0B, 0x17, 0x15, 0x0C, 0x1B, 0x34, 0x08, 0x14, 0x15, 0x35, 0x08, 0x08,
  0x08, 0x30, 0x15, 0x36, 0x2E, 0x37, 0x07, 0x07, 0x09, 0x19, 0x08, 0x38, 0x09, 0x18, 0x03, 0x03,
  0x0A, 0x19, 0x0B, 0x2E, 0x2F, 0x39, 0x30, 0x2E, 0x0B, 0x1E, 0x34, 0x1A, 0x30, 0x3A, 0x19, 0x18,
  0x16, 0x3B, 0x17, 0x3C, 0x3B, 0x3B, 0x3C, 0x32, 0x14, 0x3C, 0x1D, 0x16, 0x14, 0x3D, 0x15, 0x04,
  0x08, 0x14, 0x15, 0x07, 0x30, 0x3E, 0x3F, 0x07, 0x15, 0x1D, 0x14, 0x13, 0x40, 0x19, 0x41, 0x05,
  0x08, 0x14, 0x20, 0x07, 0x2E, 0x42, 0x07, 0x06, 0x09, 0x15, 0x08, 0x05, 0x09, 0x09, 0x03, 0x02,
  0x03, 0x08, 0x1B, 0x09, 0x0B, 0x14, 0x15, 0x09, 0x1B, 0x15, 0x08, 0x08, 0x15, 0x07, 0x08, 0x03,
  0x0B, 0x30, 0x34, 0x19, 0x1E, 0x43, 0x1D, 0x15, 0x15, 0x44, 0x14, 0x45, 0x15, 0x07, 0x08, 0x03,
  0x1B, 0x15, 0x08, 0x08, 0x34, 0x46, 0x14, 0x08, 0x08, 0x14, 0x15, 0x15, 0x14, 0x0E, 0x15, 0x04,
  0x15, 0x47, 0x14, 0x48, 0x1A, 0x19, 0x13, 0x05, 0x08, 0x48, 0x0C, 0x49, 0x08, 0x05, 0x09, 0x01,
  0x08, 0x08, 0x15, 0x09, 0x30, 0x14, 0x47, 0x04, 0x15, 0x15, 0x14, 0x08, 0x4A, 0x07, 0x4B, 0x03,
  0x2E, 0x2E, 0x1A, 0x18, 0x3C, 0x4C, 0x16, 0x04, 0x07, 0x07, 0x0E, 0x05, 0x07, 0x06, 0x05, 0x02,
  0x1B, 0x09, 0x08, 0x03, 0x34, 0x15, 0x4D, 0x03, 0x08, 0x08, 0x18, 0x09, 0x4E, 0x05, 0x49, 0x01,
  0x09, 0x09, 0x08, 0x03, 0x18, 0x09, 0x05, 0x02, 0x03, 0x03, 0x04, 0x01, 0x03, 0x02, 0x01, 0x00,
];

#[rustfmt::skip]
pub const TRANSITION_CELL_DATA: [TransitionCellData; 79] = [
  TransitionCellData::new(0x00, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x42, [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x31, [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x53, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x64, [0, 1, 2, 0, 2, 5, 2, 3, 5, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x73, [0, 1, 2, 3, 4, 5, 3, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x62, [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x84, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x64, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x84, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x95, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 7, 4, 5, 7, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 8, 5, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x95, [0, 1, 2, 3, 4, 5, 3, 5, 8, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x93, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB5, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 3, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x95, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 9, 6, 7, 9, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 10, 7, 8, 10, 8, 9, 10, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 7, 2, 3, 5, 2, 5, 6, 2, 6, 7, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0x64, [0, 1, 2, 0, 2, 3, 0, 3, 5, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8, 3, 8, 9, 3, 9, 10, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 9, 3, 4, 9, 4, 5, 9, 5, 6, 9, 6, 7, 9, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 6, 7, 5, 7, 8, 5, 8, 9, 5, 9, 10, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 8, 2, 3, 5, 2, 5, 6, 2, 6, 7, 2, 7, 8, 3, 4, 5, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 3, 0, 3, 7, 3, 4, 7, 4, 5, 7, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 6, 4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC6, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 9, 6, 9, 10, 6, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 10, 6, 7, 10, 7, 8, 10, 8, 9, 10, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 9, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 9, 5, 6, 9, 6, 7, 9, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xC6, [0, 1, 2, 3, 4, 5, 6, 7, 8, 6, 8, 11, 8, 9, 11, 9, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8, 6, 8, 11, 8, 9, 11, 9, 10, 11, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 7, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 3, 4, 5, 3, 5, 10, 5, 6, 8, 5, 8, 9, 5, 9, 10, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x75, [0, 1, 2, 0, 2, 6, 2, 3, 5, 2, 5, 6, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 3, 4, 5, 3, 5, 9, 5, 6, 8, 5, 8, 9, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 6, 3, 4, 6, 4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 8, 3, 4, 8, 4, 5, 8, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 8, 9, 10, 8, 10, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB7, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 9, 4, 9, 10, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC8, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 11, 8, 9, 11, 9, 10, 11, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 8, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 9, 3, 4, 9, 4, 5, 7, 4, 7, 9, 5, 6, 7, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xA6, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 9, 7, 8, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 9, 6, 7, 9, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 9, 3, 4, 5, 3, 5, 9, 5, 6, 7, 5, 7, 9, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xB9, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 10, 7, 8, 10, 8, 9, 10]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 8, 3, 4, 5, 3, 5, 8, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xC8, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 11, 6, 7, 9, 6, 9, 10, 6, 10, 11, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xB9, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 10, 5, 6, 10, 6, 7, 10, 7, 8, 10, 8, 9, 10]),
  TransitionCellData::new(0xC8, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 4, 7, 8, 4, 8, 9, 4, 9, 10, 4, 10, 11, 0, 0, 0]),
  TransitionCellData::new(0xB9, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 7, 0, 7, 8, 0, 8, 9, 0, 9, 10]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 8, 4, 5, 8, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB9, [0, 1, 2, 0, 2, 10, 2, 3, 5, 2, 5, 6, 2, 6, 7, 2, 7, 8, 2, 8, 9, 2, 9, 10, 3, 4, 5]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 4, 0, 4, 6, 0, 6, 9, 2, 3, 4, 4, 5, 6, 6, 7, 9, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 7, 0, 7, 9, 4, 5, 7, 5, 6, 7, 7, 8, 9, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 5, 0, 5, 8, 3, 4, 5, 5, 6, 8, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 7, 0, 7, 8, 4, 5, 6, 4, 6, 7, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xB9, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 10, 4, 5, 10, 5, 6, 10, 6, 7, 10, 7, 8, 10, 8, 9, 10]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 5, 0, 5, 8, 0, 8, 9, 2, 3, 5, 3, 4, 5, 5, 6, 8, 6, 7, 8, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 6, 0, 6, 7, 0, 7, 8, 2, 3, 6, 3, 4, 6, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 9, 2, 3, 5, 2, 5, 6, 2, 6, 7, 2, 7, 8, 2, 8, 9, 3, 4, 5, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 7, 0, 7, 8, 0, 8, 9, 3, 4, 5, 3, 5, 7, 5, 6, 7, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 4, 0, 4, 7, 0, 7, 8, 2, 3, 4, 4, 5, 7, 5, 6, 7, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x86, [0, 1, 2, 0, 2, 7, 2, 3, 7, 3, 4, 6, 3, 6, 7, 4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0xA8, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 8, 0, 8, 9, 4, 5, 8, 5, 6, 7, 5, 7, 8, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 7, 0, 7, 8, 3, 4, 7, 4, 5, 6, 4, 6, 7, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 8, 2, 3, 6, 2, 6, 7, 2, 7, 8, 3, 4, 6, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 4, 0, 4, 6, 0, 6, 7, 0, 7, 8, 2, 3, 4, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
  TransitionCellData::new(0x97, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 6, 0, 6, 7, 0, 7, 8, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
];

/// Per-case vertex codes: `dir << 12 | slot << 8 | sampleA << 4 | sampleB`.
#[rustfmt::skip]
pub const TRANSITION_VERTEX_DATA: [[u16; 12]; 512] = [
  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x000
  [0x1603, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x001
  [0x2312, 0x8414, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x002
  [0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x003
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x004
  [0x2201, 0x1603, 0x199B, 0x89AC, 0x8625, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x005
  [0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x006
  [0x89AC, 0x8625, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x007
  [0x8145, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x008
  [0x8145, 0x8625, 0x8758, 0x1603, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x009
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00A
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00B
  [0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00C
  [0x199B, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00D
  [0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00E
  [0x199B, 0x89AC, 0x8758, 0x8145, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00F
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x010
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000], // 0x011
  [0x2312, 0x8414, 0x2201, 0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x012
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000], // 0x013
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x014
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x015
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x016
  [0x199B, 0x88BC, 0x8378, 0x8758, 0x8625, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x017
  [0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x018
  [0x1603, 0x199B, 0x289A, 0x2201, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000, 0x0000], // 0x019
  [0x2312, 0x8414, 0x2201, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01A
  [0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000], // 0x01B
  [0x88BC, 0x8378, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01C
  [0x88BC, 0x8378, 0x8145, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01D
  [0x88BC, 0x8378, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01E
  [0x199B, 0x88BC, 0x8378, 0x8145, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01F
  [0x8267, 0x8547, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x020
  [0x8267, 0x8547, 0x8378, 0x1603, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x021
  [0x2312, 0x8414, 0x2201, 0x8267, 0x8547, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x022
  [0x8267, 0x8547, 0x8378, 0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x023
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x024
  [0x8267, 0x8547, 0x8378, 0x2201, 0x1603, 0x199B, 0x89AC, 0x8625, 0x2312, 0x0000, 0x0000, 0x0000], // 0x025
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x026
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8625, 0x8414, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x027
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x028
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x1603, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000], // 0x029
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x0000, 0x0000, 0x0000], // 0x02A
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x0000], // 0x02B
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x02C
  [0x8267, 0x8547, 0x8378, 0x199B, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x1603, 0x0000, 0x0000], // 0x02D
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x02E
  [0x8267, 0x8547, 0x8378, 0x199B, 0x89AC, 0x8758, 0x8145, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000], // 0x02F
  [0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x030
  [0x1603, 0x199B, 0x289A, 0x2201, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x031
  [0x2312, 0x8414, 0x2201, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x032
  [0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000], // 0x033
  [0x289A, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x034
  [0x199B, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x2312, 0x2201, 0x1603, 0x0000, 0x0000, 0x0000], // 0x035
  [0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x036
  [0x199B, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x037
  [0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x038
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000, 0x0000], // 0x039
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000, 0x0000, 0x0000], // 0x03A
  [0x289A, 0x2312, 0x8414, 0x1603, 0x199B, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000], // 0x03B
  [0x289A, 0x88BC, 0x8267, 0x8547, 0x8145, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x03C
  [0x199B, 0x88BC, 0x8267, 0x8547, 0x8145, 0x2312, 0x2201, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x03D
  [0x88BC, 0x8267, 0x8547, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x03E
  [0x199B, 0x88BC, 0x8267, 0x8547, 0x8145, 0x8414, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x03F
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x040
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x041
  [0x2312, 0x8414, 0x2201, 0x199B, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x042
  [0x88BC, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x043
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x044
  [0x1736, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x2312, 0x2201, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x045
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x046
  [0x89AC, 0x8625, 0x8414, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x047
  [0x8145, 0x8625, 0x8758, 0x199B, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x048
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x049
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x199B, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000], // 0x04A
  [0x8145, 0x8625, 0x8758, 0x88BC, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8267, 0x0000, 0x0000], // 0x04B
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x04C
  [0x88BC, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x0000, 0x0000, 0x0000], // 0x04D
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x04E
  [0x88BC, 0x89AC, 0x8758, 0x8145, 0x8414, 0x1603, 0x1736, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000], // 0x04F
  [0x8378, 0x8758, 0x89AC, 0x199B, 0x1736, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x050
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x051
  [0x2312, 0x8414, 0x2201, 0x8378, 0x8758, 0x89AC, 0x199B, 0x1736, 0x8267, 0x0000, 0x0000, 0x0000], // 0x052
  [0x89AC, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x0000, 0x0000, 0x0000], // 0x053
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x054
  [0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x055
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x056
  [0x8414, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x057
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x058
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x059
  [0x2312, 0x8414, 0x2201, 0x199B, 0x1736, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000], // 0x05A
  [0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000], // 0x05B
  [0x289A, 0x199B, 0x1736, 0x8267, 0x8378, 0x8145, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x05C
  [0x8145, 0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x05D
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x05E
  [0x8414, 0x1603, 0x1736, 0x8267, 0x8378, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x05F
  [0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x060
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x061
  [0x2312, 0x8414, 0x2201, 0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x062
  [0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x063
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x064
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x065
  [0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x066
  [0x89AC, 0x8625, 0x8414, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x067
  [0x8145, 0x8625, 0x8758, 0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x068
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2201, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000], // 0x069
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000], // 0x06A
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000], // 0x06B
  [0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000], // 0x06C
  [0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000], // 0x06D
  [0x199B, 0x1736, 0x8547, 0x8378, 0x88BC, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000], // 0x06E
  [0x89AC, 0x8758, 0x8145, 0x8414, 0x1603, 0x1736, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x06F
  [0x199B, 0x1736, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x070
  [0x89AC, 0x289A, 0x2201, 0x1603, 0x1736, 0x8547, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x071
  [0x2312, 0x8414, 0x2201, 0x199B, 0x1736, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x072
  [0x89AC, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8547, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000], // 0x073
  [0x199B, 0x1736, 0x8547, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x074
  [0x8547, 0x8758, 0x8625, 0x2312, 0x2201, 0x1603, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x075
  [0x199B, 0x1736, 0x8547, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x076
  [0x8758, 0x8625, 0x8414, 0x1603, 0x1736, 0x8547, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x077
  [0x199B, 0x1736, 0x8547, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x078
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8547, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x079
  [0x2312, 0x8414, 0x2201, 0x199B, 0x1736, 0x8547, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x07A
  [0x8145, 0x8625, 0x89AC, 0x289A, 0x2312, 0x8414, 0x1603, 0x1736, 0x8547, 0x0000, 0x0000, 0x0000], // 0x07B
  [0x199B, 0x1736, 0x8547, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x07C
  [0x1603, 0x1736, 0x8547, 0x8145, 0x2312, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x07D
  [0x199B, 0x1736, 0x8547, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x07E
  [0x8547, 0x8145, 0x8414, 0x1603, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x07F
  [0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x080
  [0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x081
  [0x2312, 0x8414, 0x2201, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x082
  [0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x083
  [0x1736, 0x1603, 0x8034, 0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x084
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x085
  [0x1736, 0x1603, 0x8034, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x086
  [0x89AC, 0x8625, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x087
  [0x8145, 0x8625, 0x8758, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x088
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x089
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000], // 0x08A
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x08B
  [0x1736, 0x1603, 0x8034, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x08C
  [0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x08D
  [0x1736, 0x1603, 0x8034, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x08E
  [0x89AC, 0x8758, 0x8145, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x08F
  [0x1736, 0x1603, 0x8034, 0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x090
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x091
  [0x2312, 0x8414, 0x2201, 0x1736, 0x1603, 0x8034, 0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000], // 0x092
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000], // 0x093
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x094
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x095
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8378, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x096
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x097
  [0x1736, 0x1603, 0x8034, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x098
  [0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000, 0x0000], // 0x099
  [0x2312, 0x8414, 0x2201, 0x1736, 0x1603, 0x8034, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x0000], // 0x09A
  [0x89AC, 0x88BC, 0x8378, 0x8145, 0x8625, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000], // 0x09B
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8378, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x09C
  [0x88BC, 0x8378, 0x8145, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x09D
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8378, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x09E
  [0x88BC, 0x8378, 0x8145, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x09F
  [0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0A0
  [0x8267, 0x8547, 0x8378, 0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0A1
  [0x2312, 0x8414, 0x2201, 0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000], // 0x0A2
  [0x8267, 0x8547, 0x8378, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x0A3
  [0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000], // 0x0A4
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8625, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000], // 0x0A5
  [0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000], // 0x0A6
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8625, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x0A7
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000], // 0x0A8
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000], // 0x0A9
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034], // 0x0AA
  [0x8145, 0x8625, 0x8758, 0x8267, 0x8547, 0x8378, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B], // 0x0AB
  [0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000], // 0x0AC
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000], // 0x0AD
  [0x8267, 0x8547, 0x8378, 0x1736, 0x1603, 0x8034, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A], // 0x0AE
  [0x8267, 0x8547, 0x8378, 0x89AC, 0x8758, 0x8145, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000], // 0x0AF
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0B0
  [0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000], // 0x0B1
  [0x2312, 0x8414, 0x2201, 0x1736, 0x1603, 0x8034, 0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x0000], // 0x0B2
  [0x88BC, 0x8267, 0x8547, 0x8758, 0x89AC, 0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000], // 0x0B3
  [0x1736, 0x1603, 0x8034, 0x289A, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x2312, 0x0000, 0x0000], // 0x0B4
  [0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000], // 0x0B5
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000], // 0x0B6
  [0x8034, 0x1736, 0x199B, 0x88BC, 0x8267, 0x8547, 0x8758, 0x8625, 0x8414, 0x0000, 0x0000, 0x0000], // 0x0B7
  [0x1736, 0x1603, 0x8034, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000, 0x0000, 0x0000], // 0x0B8
  [0x289A, 0x2201, 0x8034, 0x1736, 0x199B, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547, 0x0000], // 0x0B9
  [0x2312, 0x8414, 0x2201, 0x1736, 0x1603, 0x8034, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547], // 0x0BA
  [0x289A, 0x2312, 0x8414, 0x8034, 0x1736, 0x199B, 0x8145, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x8547], // 0x0BB
  [0x1736, 0x1603, 0x8034, 0x289A, 0x88BC, 0x8267, 0x8547, 0x8145, 0x2312, 0x0000, 0x0000, 0x0000], // 0x0BC
  [0x88BC, 0x8267, 0x8547, 0x8145, 0x2312, 0x2201, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x0BD
  [0x1736, 0x1603, 0x8034, 0x88BC, 0x8267, 0x8547, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x0BE
  [0x88BC, 0x8267, 0x8547, 0x8145, 0x8414, 0x8034, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0BF
  [0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C0
  [0x289A, 0x2201, 0x8034, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C1
  [0x2312, 0x8414, 0x2201, 0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C2
  [0x88BC, 0x289A, 0x2312, 0x8414, 0x8034, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C3
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000], // 0x0C4
  [0x88BC, 0x89AC, 0x8625, 0x2312, 0x2201, 0x8034, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C5
  [0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x0C6
  [0x89AC, 0x8625, 0x8414, 0x8034, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C7
  [0x8145, 0x8625, 0x8758, 0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C8
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2201, 0x8034, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C9
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000], // 0x0CA
  [0x8145, 0x8625, 0x8758, 0x88BC, 0x289A, 0x2312, 0x8414, 0x8034, 0x8267, 0x0000, 0x0000, 0x0000], // 0x0CB
  [0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x0000, 0x0000], // 0x0CC
  [0x88BC, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x8034, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0CD
  [0x8034, 0x8267, 0x88BC, 0x199B, 0x1603, 0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000], // 0x0CE
  [0x88BC, 0x89AC, 0x8758, 0x8145, 0x8414, 0x8034, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0CF
  [0x89AC, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D0
  [0x289A, 0x2201, 0x8034, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D1
  [0x2312, 0x8414, 0x2201, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8758, 0x0000, 0x0000], // 0x0D2
  [0x89AC, 0x289A, 0x2312, 0x8414, 0x8034, 0x8267, 0x8378, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D3
  [0x289A, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8758, 0x8625, 0x2312, 0x0000, 0x0000, 0x0000], // 0x0D4
  [0x8034, 0x8267, 0x8378, 0x8758, 0x8625, 0x2312, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D5
  [0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000], // 0x0D6
  [0x8758, 0x8625, 0x8414, 0x8034, 0x8267, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D7
  [0x8145, 0x8625, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D8
  [0x289A, 0x2201, 0x8034, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D9
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x0000], // 0x0DA
  [0x289A, 0x2312, 0x8414, 0x8034, 0x8267, 0x8378, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x0DB
  [0x289A, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8145, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0DC
  [0x8267, 0x8378, 0x8145, 0x2312, 0x2201, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0DD
  [0x8414, 0x2201, 0x289A, 0x199B, 0x1603, 0x8034, 0x8267, 0x8378, 0x8145, 0x0000, 0x0000, 0x0000], // 0x0DE
  [0x8034, 0x8267, 0x8378, 0x8145, 0x8414, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0DF
  [0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E0
  [0x289A, 0x2201, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E1
  [0x2312, 0x8414, 0x2201, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000], // 0x0E2
  [0x289A, 0x2312, 0x8414, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E3
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000, 0x0000], // 0x0E4
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E5
  [0x89AC, 0x8625, 0x8414, 0x2201, 0x289A, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000], // 0x0E6
  [0x89AC, 0x8625, 0x8414, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E7
  [0x8145, 0x8625, 0x8758, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000, 0x0000, 0x0000], // 0x0E8
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2201, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x0E9
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x8758, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034], // 0x0EA
  [0x8145, 0x8625, 0x8758, 0x289A, 0x2312, 0x8414, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000], // 0x0EB
  [0x89AC, 0x8758, 0x8145, 0x2312, 0x289A, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034, 0x0000], // 0x0EC
  [0x8547, 0x8378, 0x88BC, 0x89AC, 0x8758, 0x8145, 0x2312, 0x2201, 0x8034, 0x0000, 0x0000, 0x0000], // 0x0ED
  [0x89AC, 0x8758, 0x8145, 0x8414, 0x2201, 0x289A, 0x8547, 0x8378, 0x88BC, 0x199B, 0x1603, 0x8034], // 0x0EE
  [0x89AC, 0x8758, 0x8145, 0x8414, 0x8034, 0x8547, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0EF
  [0x89AC, 0x199B, 0x1603, 0x8034, 0x8547, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F0
  [0x289A, 0x2201, 0x8034, 0x8547, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F1
  [0x2312, 0x8414, 0x2201, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8547, 0x8758, 0x0000, 0x0000, 0x0000], // 0x0F2
  [0x89AC, 0x289A, 0x2312, 0x8414, 0x8034, 0x8547, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F3
  [0x289A, 0x199B, 0x1603, 0x8034, 0x8547, 0x8758, 0x8625, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F4
  [0x8547, 0x8758, 0x8625, 0x2312, 0x2201, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F5
  [0x199B, 0x1603, 0x8034, 0x8547, 0x8758, 0x8625, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x0F6
  [0x8034, 0x8547, 0x8758, 0x8625, 0x8414, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F7
  [0x8145, 0x8625, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8547, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F8
  [0x289A, 0x2201, 0x8034, 0x8547, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F9
  [0x2312, 0x8414, 0x2201, 0x8145, 0x8625, 0x89AC, 0x199B, 0x1603, 0x8034, 0x8547, 0x0000, 0x0000], // 0x0FA
  [0x289A, 0x2312, 0x8414, 0x8034, 0x8547, 0x8145, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0FB
  [0x289A, 0x199B, 0x1603, 0x8034, 0x8547, 0x8145, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0FC
  [0x2312, 0x2201, 0x8034, 0x8547, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0FD
  [0x199B, 0x1603, 0x8034, 0x8547, 0x8145, 0x8414, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0FE
  [0x8145, 0x8414, 0x8034, 0x8547, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0FF
  [0x8414, 0x8145, 0x8547, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x100
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000], // 0x101
  [0x2201, 0x2312, 0x8145, 0x8547, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x102
  [0x289A, 0x2312, 0x8145, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x103
  [0x8414, 0x8145, 0x8547, 0x8034, 0x89AC, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x104
  [0x8414, 0x8145, 0x8547, 0x8034, 0x2201, 0x1603, 0x199B, 0x89AC, 0x8625, 0x2312, 0x0000, 0x0000], // 0x105
  [0x289A, 0x89AC, 0x8625, 0x8145, 0x8547, 0x8034, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x106
  [0x89AC, 0x8625, 0x8145, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x107
  [0x8547, 0x8034, 0x8414, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x108
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8547, 0x8034, 0x8414, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000], // 0x109
  [0x8625, 0x8758, 0x8547, 0x8034, 0x2201, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10A
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10B
  [0x89AC, 0x8758, 0x8547, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10C
  [0x89AC, 0x8758, 0x8547, 0x8034, 0x8414, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000], // 0x10D
  [0x89AC, 0x8758, 0x8547, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10E
  [0x89AC, 0x8758, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10F
  [0x8414, 0x8145, 0x8547, 0x8034, 0x8758, 0x89AC, 0x88BC, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000], // 0x110
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x8034, 0x8758, 0x89AC, 0x88BC, 0x8378], // 0x111
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x2201, 0x2312, 0x8145, 0x8547, 0x8034, 0x0000, 0x0000, 0x0000], // 0x112
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x289A, 0x2312, 0x8145, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000], // 0x113
  [0x8414, 0x8145, 0x8547, 0x8034, 0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000], // 0x114
  [0x8414, 0x8145, 0x8547, 0x8034, 0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x2201, 0x1603, 0x199B], // 0x115
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x116
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000], // 0x117
  [0x89AC, 0x88BC, 0x8378, 0x8547, 0x8034, 0x8414, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x118
  [0x1603, 0x199B, 0x289A, 0x2201, 0x89AC, 0x88BC, 0x8378, 0x8547, 0x8034, 0x8414, 0x8625, 0x0000], // 0x119
  [0x89AC, 0x88BC, 0x8378, 0x8547, 0x8034, 0x2201, 0x2312, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x11A
  [0x8034, 0x1603, 0x199B, 0x289A, 0x2312, 0x8625, 0x89AC, 0x88BC, 0x8378, 0x8547, 0x0000, 0x0000], // 0x11B
  [0x88BC, 0x8378, 0x8547, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x11C
  [0x88BC, 0x8378, 0x8547, 0x8034, 0x8414, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000], // 0x11D
  [0x289A, 0x88BC, 0x8378, 0x8547, 0x8034, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x11E
  [0x8034, 0x1603, 0x199B, 0x88BC, 0x8378, 0x8547, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x11F
  [0x8267, 0x8034, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x120
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8267, 0x8034, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000], // 0x121
  [0x8378, 0x8267, 0x8034, 0x2201, 0x2312, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x122
  [0x289A, 0x2312, 0x8145, 0x8378, 0x8267, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x123
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x8267, 0x8034, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000], // 0x124
  [0x8267, 0x8034, 0x8414, 0x8145, 0x8378, 0x2201, 0x1603, 0x199B, 0x89AC, 0x8625, 0x2312, 0x0000], // 0x125
  [0x289A, 0x89AC, 0x8625, 0x8145, 0x8378, 0x8267, 0x8034, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000], // 0x126
  [0x89AC, 0x8625, 0x8145, 0x8378, 0x8267, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x127
  [0x8414, 0x8625, 0x8758, 0x8378, 0x8267, 0x8034, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x128
  [0x1603, 0x199B, 0x289A, 0x2201, 0x8414, 0x8625, 0x8758, 0x8378, 0x8267, 0x8034, 0x0000, 0x0000], // 0x129
  [0x8034, 0x2201, 0x2312, 0x8625, 0x8758, 0x8378, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x12A
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8378, 0x8267, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000], // 0x12B
  [0x89AC, 0x8758, 0x8378, 0x8267, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x12C
  [0x89AC, 0x8758, 0x8378, 0x8267, 0x8034, 0x8414, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000, 0x0000], // 0x12D
  [0x289A, 0x89AC, 0x8758, 0x8378, 0x8267, 0x8034, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x12E
  [0x89AC, 0x8758, 0x8378, 0x8267, 0x8034, 0x1603, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x12F
  [0x88BC, 0x8267, 0x8034, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x130
  [0x1603, 0x199B, 0x289A, 0x2201, 0x88BC, 0x8267, 0x8034, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000], // 0x131
  [0x88BC, 0x8267, 0x8034, 0x2201, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x132
  [0x8034, 0x1603, 0x199B, 0x289A, 0x2312, 0x8145, 0x8758, 0x89AC, 0x88BC, 0x8267, 0x0000, 0x0000], // 0x133
  [0x88BC, 0x8267, 0x8034, 0x8414, 0x8145, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x134
  [0x88BC, 0x8267, 0x8034, 0x8414, 0x8145, 0x8758, 0x8625, 0x2312, 0x2201, 0x1603, 0x199B, 0x0000], // 0x135
  [0x8758, 0x8625, 0x8145, 0x88BC, 0x8267, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x136
  [0x8758, 0x8625, 0x8145, 0x199B, 0x88BC, 0x8267, 0x8034, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x137
  [0x89AC, 0x88BC, 0x8267, 0x8034, 0x8414, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x138
  [0x1603, 0x199B, 0x289A, 0x2201, 0x89AC, 0x88BC, 0x8267, 0x8034, 0x8414, 0x8625, 0x0000, 0x0000], // 0x139
  [0x88BC, 0x8267, 0x8034, 0x2201, 0x2312, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13A
  [0x8034, 0x1603, 0x199B, 0x289A, 0x2312, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x0000, 0x0000, 0x0000], // 0x13B
  [0x88BC, 0x8267, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13C
  [0x2201, 0x1603, 0x199B, 0x88BC, 0x8267, 0x8034, 0x8414, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13D
  [0x88BC, 0x8267, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13E
  [0x199B, 0x88BC, 0x8267, 0x8034, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13F
  [0x8414, 0x8145, 0x8547, 0x8034, 0x199B, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x140
  [0x8414, 0x8145, 0x8547, 0x8034, 0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000], // 0x141
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x2201, 0x2312, 0x8145, 0x8547, 0x8034, 0x0000, 0x0000, 0x0000], // 0x142
  [0x289A, 0x2312, 0x8145, 0x8547, 0x8034, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x143
  [0x8414, 0x8145, 0x8547, 0x8034, 0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x2312, 0x289A], // 0x144
  [0x8414, 0x8145, 0x8547, 0x8034, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x2312, 0x2201, 0x1603], // 0x145
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x289A, 0x89AC, 0x8625, 0x8145, 0x8547, 0x8034, 0x2201, 0x0000], // 0x146
  [0x89AC, 0x8625, 0x8145, 0x8547, 0x8034, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x147
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x8547, 0x8034, 0x8414, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000], // 0x148
  [0x8547, 0x8034, 0x8414, 0x8625, 0x8758, 0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000], // 0x149
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x8625, 0x8758, 0x8547, 0x8034, 0x2201, 0x2312, 0x0000, 0x0000], // 0x14A
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8547, 0x8034, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000, 0x0000], // 0x14B
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8758, 0x8547, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000], // 0x14C
  [0x89AC, 0x8758, 0x8547, 0x8034, 0x8414, 0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x88BC, 0x0000], // 0x14D
  [0x199B, 0x1736, 0x8267, 0x88BC, 0x89AC, 0x8758, 0x8547, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000], // 0x14E
  [0x1736, 0x8267, 0x88BC, 0x89AC, 0x8758, 0x8547, 0x8034, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x14F
  [0x8414, 0x8145, 0x8547, 0x8034, 0x8378, 0x8758, 0x89AC, 0x199B, 0x1736, 0x8267, 0x0000, 0x0000], // 0x150
  [0x8414, 0x8145, 0x8547, 0x8034, 0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x89AC], // 0x151
  [0x2201, 0x2312, 0x8145, 0x8547, 0x8034, 0x8378, 0x8758, 0x89AC, 0x199B, 0x1736, 0x8267, 0x0000], // 0x152
  [0x289A, 0x2312, 0x8145, 0x8547, 0x8034, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000], // 0x153
  [0x8414, 0x8145, 0x8547, 0x8034, 0x199B, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A], // 0x154
  [0x8414, 0x8145, 0x8547, 0x8034, 0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625], // 0x155
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x8034, 0x2201, 0x289A, 0x0000], // 0x156
  [0x8145, 0x8547, 0x8034, 0x1603, 0x1736, 0x8267, 0x8378, 0x8758, 0x8625, 0x0000, 0x0000, 0x0000], // 0x157
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x158
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x8414, 0x8625, 0x89AC, 0x0000], // 0x159
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x2201, 0x2312, 0x8625, 0x89AC, 0x0000, 0x0000], // 0x15A
  [0x8625, 0x89AC, 0x289A, 0x2312, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x1603, 0x0000, 0x0000], // 0x15B
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x15C
  [0x2312, 0x2201, 0x1603, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x8414, 0x0000, 0x0000, 0x0000], // 0x15D
  [0x199B, 0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x15E
  [0x1736, 0x8267, 0x8378, 0x8547, 0x8034, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x15F
  [0x88BC, 0x199B, 0x1736, 0x8034, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x160
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x161
  [0x88BC, 0x199B, 0x1736, 0x8034, 0x2201, 0x2312, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000], // 0x162
  [0x8034, 0x1603, 0x1736, 0x289A, 0x2312, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x163
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x88BC, 0x199B, 0x1736, 0x8034, 0x8414, 0x8145, 0x8378, 0x0000], // 0x164
  [0x8145, 0x8378, 0x88BC, 0x89AC, 0x8625, 0x2312, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x0000], // 0x165
  [0x2201, 0x289A, 0x89AC, 0x8625, 0x8145, 0x8378, 0x88BC, 0x199B, 0x1736, 0x8034, 0x0000, 0x0000], // 0x166
  [0x8034, 0x1603, 0x1736, 0x8145, 0x8378, 0x88BC, 0x89AC, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x167
  [0x88BC, 0x199B, 0x1736, 0x8034, 0x8414, 0x8625, 0x8758, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000], // 0x168
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x8625, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000], // 0x169
  [0x88BC, 0x199B, 0x1736, 0x8034, 0x2201, 0x2312, 0x8625, 0x8758, 0x8378, 0x0000, 0x0000, 0x0000], // 0x16A
  [0x8034, 0x1603, 0x1736, 0x289A, 0x2312, 0x8625, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x16B
  [0x8414, 0x2312, 0x289A, 0x89AC, 0x8758, 0x8378, 0x88BC, 0x199B, 0x1736, 0x8034, 0x0000, 0x0000], // 0x16C
  [0x89AC, 0x8758, 0x8378, 0x88BC, 0x2312, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x0000, 0x0000], // 0x16D
  [0x2201, 0x289A, 0x89AC, 0x8758, 0x8378, 0x88BC, 0x199B, 0x1736, 0x8034, 0x0000, 0x0000, 0x0000], // 0x16E
  [0x8034, 0x1603, 0x1736, 0x89AC, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x16F
  [0x89AC, 0x199B, 0x1736, 0x8034, 0x8414, 0x8145, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x170
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x171
  [0x199B, 0x1736, 0x8034, 0x2201, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x172
  [0x8034, 0x1603, 0x1736, 0x289A, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x173
  [0x199B, 0x1736, 0x8034, 0x8414, 0x8145, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x174
  [0x2312, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x8145, 0x8758, 0x8625, 0x0000, 0x0000, 0x0000], // 0x175
  [0x8758, 0x8625, 0x8145, 0x199B, 0x1736, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x176
  [0x8034, 0x1603, 0x1736, 0x8758, 0x8625, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x177
  [0x89AC, 0x199B, 0x1736, 0x8034, 0x8414, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x178
  [0x289A, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x179
  [0x89AC, 0x199B, 0x1736, 0x8034, 0x2201, 0x2312, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17A
  [0x8034, 0x1603, 0x1736, 0x8625, 0x89AC, 0x289A, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17B
  [0x199B, 0x1736, 0x8034, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17C
  [0x2312, 0x2201, 0x1603, 0x1736, 0x8034, 0x8414, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17D
  [0x199B, 0x1736, 0x8034, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17E
  [0x8034, 0x1603, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17F
  [0x8145, 0x8547, 0x1736, 0x1603, 0x8414, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x180
  [0x199B, 0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x181
  [0x8547, 0x1736, 0x1603, 0x2201, 0x2312, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x182
  [0x289A, 0x2312, 0x8145, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x183
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x8145, 0x8547, 0x1736, 0x1603, 0x8414, 0x0000, 0x0000, 0x0000], // 0x184
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x185
  [0x289A, 0x89AC, 0x8625, 0x8145, 0x8547, 0x1736, 0x1603, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000], // 0x186
  [0x199B, 0x89AC, 0x8625, 0x8145, 0x8547, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x187
  [0x8625, 0x8758, 0x8547, 0x1736, 0x1603, 0x8414, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x188
  [0x199B, 0x289A, 0x2201, 0x8414, 0x8625, 0x8758, 0x8547, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000], // 0x189
  [0x8547, 0x1736, 0x1603, 0x2201, 0x2312, 0x8625, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18A
  [0x199B, 0x289A, 0x2312, 0x8625, 0x8758, 0x8547, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18B
  [0x89AC, 0x8758, 0x8547, 0x1736, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18C
  [0x2201, 0x8414, 0x2312, 0x89AC, 0x8758, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18D
  [0x89AC, 0x8758, 0x8547, 0x1736, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18E
  [0x89AC, 0x8758, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18F
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x8145, 0x8547, 0x1736, 0x1603, 0x8414, 0x0000, 0x0000, 0x0000], // 0x190
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x199B, 0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x1736, 0x0000], // 0x191
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x8547, 0x1736, 0x1603, 0x2201, 0x2312, 0x8145, 0x0000, 0x0000], // 0x192
  [0x8758, 0x89AC, 0x88BC, 0x8378, 0x289A, 0x2312, 0x8145, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000], // 0x193
  [0x8145, 0x8547, 0x1736, 0x1603, 0x8414, 0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000], // 0x194
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8547, 0x1736, 0x199B, 0x0000], // 0x195
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x1736, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000], // 0x196
  [0x88BC, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x197
  [0x89AC, 0x88BC, 0x8378, 0x8547, 0x1736, 0x1603, 0x8414, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x198
  [0x8414, 0x8625, 0x89AC, 0x88BC, 0x8378, 0x8547, 0x1736, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000], // 0x199
  [0x89AC, 0x88BC, 0x8378, 0x8547, 0x1736, 0x1603, 0x2201, 0x2312, 0x8625, 0x0000, 0x0000, 0x0000], // 0x19A
  [0x289A, 0x2312, 0x8625, 0x89AC, 0x88BC, 0x8378, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000], // 0x19B
  [0x88BC, 0x8378, 0x8547, 0x1736, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x19C
  [0x2201, 0x8414, 0x2312, 0x88BC, 0x8378, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x19D
  [0x289A, 0x88BC, 0x8378, 0x8547, 0x1736, 0x1603, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x19E
  [0x88BC, 0x8378, 0x8547, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x19F
  [0x1736, 0x1603, 0x8414, 0x8145, 0x8378, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A0
  [0x199B, 0x289A, 0x2201, 0x8414, 0x8145, 0x8378, 0x8267, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A1
  [0x8145, 0x8378, 0x8267, 0x1736, 0x1603, 0x2201, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A2
  [0x289A, 0x2312, 0x8145, 0x8378, 0x8267, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A3
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x1736, 0x1603, 0x8414, 0x8145, 0x8378, 0x8267, 0x0000, 0x0000], // 0x1A4
  [0x8267, 0x1736, 0x199B, 0x89AC, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000], // 0x1A5
  [0x289A, 0x89AC, 0x8625, 0x8145, 0x8378, 0x8267, 0x1736, 0x1603, 0x2201, 0x0000, 0x0000, 0x0000], // 0x1A6
  [0x199B, 0x89AC, 0x8625, 0x8145, 0x8378, 0x8267, 0x1736, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A7
  [0x8414, 0x8625, 0x8758, 0x8378, 0x8267, 0x1736, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A8
  [0x199B, 0x289A, 0x2201, 0x8414, 0x8625, 0x8758, 0x8378, 0x8267, 0x1736, 0x0000, 0x0000, 0x0000], // 0x1A9
  [0x2201, 0x2312, 0x8625, 0x8758, 0x8378, 0x8267, 0x1736, 0x1603, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1AA
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8378, 0x8267, 0x1736, 0x199B, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1AB
  [0x89AC, 0x8758, 0x8378, 0x8267, 0x1736, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000], // 0x1AC
  [0x2201, 0x8414, 0x2312, 0x8267, 0x1736, 0x199B, 0x89AC, 0x8758, 0x8378, 0x0000, 0x0000, 0x0000], // 0x1AD
  [0x89AC, 0x8758, 0x8378, 0x8267, 0x1736, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1AE
  [0x8267, 0x1736, 0x199B, 0x89AC, 0x8758, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1AF
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1B0
  [0x289A, 0x2201, 0x8414, 0x8145, 0x8758, 0x89AC, 0x88BC, 0x8267, 0x1736, 0x199B, 0x0000, 0x0000], // 0x1B1
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x2201, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x1B2
  [0x8145, 0x8758, 0x89AC, 0x88BC, 0x8267, 0x1736, 0x199B, 0x289A, 0x2312, 0x0000, 0x0000, 0x0000], // 0x1B3
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x8414, 0x8145, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000, 0x0000], // 0x1B4
  [0x1736, 0x199B, 0x88BC, 0x8267, 0x8758, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x0000, 0x0000], // 0x1B5
  [0x8758, 0x8625, 0x8145, 0x88BC, 0x8267, 0x1736, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000], // 0x1B6
  [0x8758, 0x8625, 0x8145, 0x1736, 0x199B, 0x88BC, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1B7
  [0x89AC, 0x88BC, 0x8267, 0x1736, 0x1603, 0x8414, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1B8
  [0x8414, 0x8625, 0x89AC, 0x88BC, 0x8267, 0x1736, 0x199B, 0x289A, 0x2201, 0x0000, 0x0000, 0x0000], // 0x1B9
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x2201, 0x2312, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BA
  [0x8625, 0x89AC, 0x88BC, 0x8267, 0x1736, 0x199B, 0x289A, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BB
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BC
  [0x2201, 0x8414, 0x2312, 0x1736, 0x199B, 0x88BC, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BD
  [0x88BC, 0x8267, 0x1736, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BE
  [0x1736, 0x199B, 0x88BC, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1BF
  [0x199B, 0x1603, 0x8414, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C0
  [0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C1
  [0x199B, 0x1603, 0x2201, 0x2312, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C2
  [0x289A, 0x2312, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C3
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x199B, 0x1603, 0x8414, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000], // 0x1C4
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x1C5
  [0x88BC, 0x199B, 0x1603, 0x2201, 0x289A, 0x89AC, 0x8625, 0x8145, 0x8547, 0x8267, 0x0000, 0x0000], // 0x1C6
  [0x8547, 0x8267, 0x88BC, 0x89AC, 0x8625, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C7
  [0x199B, 0x1603, 0x8414, 0x8625, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C8
  [0x289A, 0x2201, 0x8414, 0x8625, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C9
  [0x199B, 0x1603, 0x2201, 0x2312, 0x8625, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000], // 0x1CA
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1CB
  [0x8414, 0x2312, 0x289A, 0x89AC, 0x8758, 0x8547, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000], // 0x1CC
  [0x2201, 0x8414, 0x2312, 0x89AC, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1CD
  [0x2201, 0x289A, 0x89AC, 0x8758, 0x8547, 0x8267, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000], // 0x1CE
  [0x89AC, 0x8758, 0x8547, 0x8267, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1CF
  [0x199B, 0x1603, 0x8414, 0x8145, 0x8547, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x1D0
  [0x289A, 0x2201, 0x8414, 0x8145, 0x8547, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000], // 0x1D1
  [0x199B, 0x1603, 0x2201, 0x2312, 0x8145, 0x8547, 0x8267, 0x8378, 0x8758, 0x89AC, 0x0000, 0x0000], // 0x1D2
  [0x8378, 0x8758, 0x89AC, 0x289A, 0x2312, 0x8145, 0x8547, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1D3
  [0x199B, 0x1603, 0x8414, 0x8145, 0x8547, 0x8267, 0x8378, 0x8758, 0x8625, 0x2312, 0x289A, 0x0000], // 0x1D4
  [0x8758, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8547, 0x8267, 0x8378, 0x0000, 0x0000, 0x0000], // 0x1D5
  [0x199B, 0x1603, 0x2201, 0x289A, 0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x8267, 0x0000, 0x0000], // 0x1D6
  [0x8378, 0x8758, 0x8625, 0x8145, 0x8547, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1D7
  [0x8378, 0x8547, 0x8267, 0x199B, 0x1603, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1D8
  [0x8378, 0x8547, 0x8267, 0x289A, 0x2201, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1D9
  [0x8378, 0x8547, 0x8267, 0x2312, 0x8625, 0x89AC, 0x199B, 0x1603, 0x2201, 0x0000, 0x0000, 0x0000], // 0x1DA
  [0x8378, 0x8547, 0x8267, 0x8625, 0x89AC, 0x289A, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1DB
  [0x8378, 0x8547, 0x8267, 0x199B, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1DC
  [0x2201, 0x8414, 0x2312, 0x8378, 0x8547, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1DD
  [0x8378, 0x8547, 0x8267, 0x199B, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1DE
  [0x8378, 0x8547, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1DF
  [0x199B, 0x1603, 0x8414, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E0
  [0x88BC, 0x289A, 0x2201, 0x8414, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E1
  [0x88BC, 0x199B, 0x1603, 0x2201, 0x2312, 0x8145, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E2
  [0x289A, 0x2312, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E3
  [0x89AC, 0x8625, 0x2312, 0x289A, 0x199B, 0x1603, 0x8414, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000], // 0x1E4
  [0x89AC, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E5
  [0x2201, 0x289A, 0x89AC, 0x8625, 0x8145, 0x8378, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000], // 0x1E6
  [0x8145, 0x8378, 0x88BC, 0x89AC, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E7
  [0x199B, 0x1603, 0x8414, 0x8625, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E8
  [0x88BC, 0x289A, 0x2201, 0x8414, 0x8625, 0x8758, 0x8378, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E9
  [0x8758, 0x8378, 0x88BC, 0x199B, 0x1603, 0x2201, 0x2312, 0x8625, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1EA
  [0x289A, 0x2312, 0x8625, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1EB
  [0x8414, 0x2312, 0x289A, 0x89AC, 0x8758, 0x8378, 0x88BC, 0x199B, 0x1603, 0x0000, 0x0000, 0x0000], // 0x1EC
  [0x2201, 0x8414, 0x2312, 0x89AC, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1ED
  [0x8378, 0x88BC, 0x199B, 0x1603, 0x2201, 0x289A, 0x89AC, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1EE
  [0x89AC, 0x8758, 0x8378, 0x88BC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1EF
  [0x199B, 0x1603, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F0
  [0x289A, 0x2201, 0x8414, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F1
  [0x199B, 0x1603, 0x2201, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F2
  [0x289A, 0x2312, 0x8145, 0x8758, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F3
  [0x8625, 0x2312, 0x289A, 0x199B, 0x1603, 0x8414, 0x8145, 0x8758, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F4
  [0x8758, 0x8625, 0x2312, 0x2201, 0x8414, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F5
  [0x8758, 0x8625, 0x8145, 0x199B, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F6
  [0x8758, 0x8625, 0x8145, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F7
  [0x199B, 0x1603, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F8
  [0x289A, 0x2201, 0x8414, 0x8625, 0x89AC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F9
  [0x2312, 0x8625, 0x89AC, 0x199B, 0x1603, 0x2201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FA
  [0x8625, 0x89AC, 0x289A, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FB
  [0x199B, 0x1603, 0x8414, 0x2312, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FC
  [0x2201, 0x8414, 0x2312, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FD
  [0x199B, 0x1603, 0x2201, 0x289A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FE
  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1FF
];
