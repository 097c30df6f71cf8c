//! Inward shift of vertices next to faces that border a finer chunk.
//!
//! Regular and low-resolution transition vertices within one cell of such
//! a face are pushed inward, opening a slab of `transition_width · step`
//! for the transition cells. The shift is projected onto the vertex's
//! tangent plane so the surface slides along itself instead of bulging.
//!
//! ```text
//! min face, v < s:       Δ = (1 - v / s) · w
//! max face, v > S - s:   Δ = ((S - s) - v) / s · w
//! Q = V + (Δ - N (N · Δ))
//! ```

use glam::Vec3;

use crate::chunk_octree::ChunkKey;
use crate::types::{FaceFlags, MeshConfig};

/// Translation parameters of one chunk.
#[derive(Clone, Copy, Debug)]
pub struct TransitionFrame {
  step: f32,
  size: f32,
  width: f32,
  finer: FaceFlags,
}

impl TransitionFrame {
  /// Frame of chunk `key`. Inactive when `finer` is empty.
  pub fn new(key: ChunkKey, finer: FaceFlags, config: &MeshConfig) -> Self {
    let step = key.step() as f32;
    Self {
      step,
      size: key.size() as f32,
      width: config.transition_width * step,
      finer,
    }
  }

  /// True if any face borders a finer chunk.
  pub fn is_active(&self) -> bool {
    !self.finer.is_empty()
  }

  /// Raw offset of a point, before projection.
  pub fn delta(&self, p: Vec3) -> Vec3 {
    let mut delta = Vec3::ZERO;
    for face in self.finer.iter() {
      let axis = face.axis();
      let v = p[axis];
      if face.is_max() {
        if v > self.size - self.step {
          delta[axis] = (self.size - self.step - v) / self.step * self.width;
        }
      } else if v < self.step {
        delta[axis] = (1.0 - v / self.step) * self.width;
      }
    }
    delta
  }

  /// Points on a face plane with no finer neighbor must stay there, or the
  /// same-LOD neighbor would no longer line up.
  fn on_fixed_face(&self, p: Vec3) -> bool {
    crate::types::Face::ALL
      .into_iter()
      .filter(|face| !self.finer.contains(*face))
      .any(|face| {
        let plane = if face.is_max() { self.size } else { 0.0 };
        p[face.axis()] == plane
      })
  }

  /// Translated position of `p` with unit normal `normal`.
  pub fn translate(&self, p: Vec3, normal: Vec3) -> Vec3 {
    if self.on_fixed_face(p) {
      return p;
    }
    let delta = self.delta(p);
    if delta == Vec3::ZERO {
      return p;
    }
    p + (delta - normal * normal.dot(delta))
  }
}
