//! ChunkOctreeConfig - distance thresholds for LOD selection.

use glam::DVec3;

use crate::error::{Result, TerrainError};
use crate::octree::OctreeCube;

/// Configuration for chunk-octree LOD selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkOctreeConfig {
  /// World units per voxel. Scales both node centers and thresholds.
  pub world_scale: f64,

  /// A node stays whole once the camera is farther than
  /// `width * world_scale * lod_distance_factor` from its center.
  pub lod_distance_factor: f64,

  /// Subtracted from every camera distance, widening the full-detail
  /// region around the camera.
  pub high_resolution_distance: f64,
}

impl Default for ChunkOctreeConfig {
  fn default() -> Self {
    Self {
      world_scale: 1.0,
      lod_distance_factor: 2.0,
      high_resolution_distance: 0.0,
    }
  }
}

impl ChunkOctreeConfig {
  /// Same as [`ChunkOctreeConfig::default`].
  pub fn new() -> Self {
    Self::default()
  }

  /// World units per voxel.
  pub fn with_world_scale(mut self, scale: f64) -> Self {
    self.world_scale = scale;
    self
  }

  /// Set [`Self::lod_distance_factor`].
  pub fn with_lod_distance_factor(mut self, factor: f64) -> Self {
    self.lod_distance_factor = factor;
    self
  }

  /// Set [`Self::high_resolution_distance`].
  pub fn with_high_resolution_distance(mut self, distance: f64) -> Self {
    self.high_resolution_distance = distance;
    self
  }

  /// Reject non-positive or non-finite parameters.
  pub fn validate(&self) -> Result<()> {
    if !(self.world_scale > 0.0 && self.world_scale.is_finite()) {
      return Err(TerrainError::InvalidConfig {
        field: "world_scale",
        reason: format!("must be positive and finite, got {}", self.world_scale),
      });
    }
    if !(self.lod_distance_factor > 0.0 && self.lod_distance_factor.is_finite()) {
      return Err(TerrainError::InvalidConfig {
        field: "lod_distance_factor",
        reason: format!("must be positive and finite, got {}", self.lod_distance_factor),
      });
    }
    if !self.high_resolution_distance.is_finite() {
      return Err(TerrainError::InvalidConfig {
        field: "high_resolution_distance",
        reason: "must be finite".to_string(),
      });
    }
    Ok(())
  }

  /// Camera distance metric for a node.
  /// distance = |camera - center * world_scale| - high_resolution_distance
  #[inline]
  pub fn distance(&self, cube: &OctreeCube, camera: DVec3) -> f64 {
    camera.distance(cube.center.as_dvec3() * self.world_scale) - self.high_resolution_distance
  }

  /// Distance beyond which a node is not split.
  /// threshold = width * world_scale * lod_distance_factor
  #[inline]
  pub fn threshold(&self, cube: &OctreeCube) -> f64 {
    cube.width() as f64 * self.world_scale * self.lod_distance_factor
  }

  /// True when the node should own one chunk instead of splitting.
  #[inline]
  pub fn is_leaf(&self, cube: &OctreeCube, camera: DVec3) -> bool {
    cube.depth == 0 || self.distance(cube, camera) > self.threshold(cube)
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
