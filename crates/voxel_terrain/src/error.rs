//! Error type for recoverable terrain failures.
//!
//! Broken invariants (leaf/split exclusivity, equal-corner interpolation)
//! panic instead; they mean the mesh would be corrupt.

use glam::IVec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
  #[error("invalid configuration for `{field}`: {reason}")]
  InvalidConfig { field: &'static str, reason: String },

  #[error("saved leaf at {position} has {actual} samples, expected {expected}")]
  LeafSizeMismatch {
    position: IVec3,
    expected: usize,
    actual: usize,
  },

  #[error("position {position} lies outside the world")]
  OutsideWorld { position: IVec3 },
}

pub type Result<T> = std::result::Result<T, TerrainError>;
