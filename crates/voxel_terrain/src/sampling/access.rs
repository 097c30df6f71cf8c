//! Uniform view of densities and vertex caches for the polygonizers.
//!
//! Regular cells address the chunk lattice directly. Transition cells work
//! in a face-local frame `(u, v, w)` where `w` points into the chunk; a
//! `CellSpace` maps that frame back to chunk-local voxels and picks the
//! vertex cache the cell writes into.

use glam::IVec3;

use super::{SamplingCache, VertexCaches};
use crate::generator::FieldGenerator;
use crate::types::{Density, Face, Rgba8};

/// Everything a polygonizer reads and writes while meshing one chunk.
pub trait VoxelAccess {
  /// Chunk-local voxel position of a cell-space position.
  fn to_chunk(&self, local: IVec3) -> IVec3;

  /// Density at a cell-space position.
  fn value(&self, local: IVec3) -> Density;

  /// Color at a cell-space position.
  fn color(&self, local: IVec3) -> Rgba8;

  /// Vertex index cached by `cell` in `slot`, if one was stored.
  fn load_vertex(&self, cell: IVec3, slot: usize) -> Option<u32>;

  fn save_vertex(&mut self, cell: IVec3, slot: usize, index: u32);

  /// Chunk depth. Cells span `1 << depth` voxels.
  fn depth(&self) -> u32;
}

/// Coordinate frame of a family of cells.
pub trait CellSpace {
  fn to_chunk(&self, local: IVec3) -> IVec3;

  fn load(&self, caches: &VertexCaches, cell: IVec3, slot: usize) -> u32;

  fn store(&self, caches: &mut VertexCaches, cell: IVec3, slot: usize, index: u32);
}

/// Regular cells: cell space is chunk space.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegularSpace;

impl CellSpace for RegularSpace {
  #[inline]
  fn to_chunk(&self, local: IVec3) -> IVec3 {
    local
  }

  #[inline]
  fn load(&self, caches: &VertexCaches, cell: IVec3, slot: usize) -> u32 {
    caches.regular(cell)[slot]
  }

  #[inline]
  fn store(&self, caches: &mut VertexCaches, cell: IVec3, slot: usize, index: u32) {
    caches.regular_mut(cell)[slot] = index;
  }
}

/// Transition cells along one chunk face.
///
/// `(u, v)` span the face and `w` points inward, with `u × v = w`, so the
/// transition tables keep their winding after mapping.
///
/// ```text
/// face   chunk-local (x, y, z)
/// XMin   (w,     u,     v)
/// XMax   (S - w, v,     u)
/// YMin   (v,     w,     u)
/// YMax   (u,     S - w, v)
/// ZMin   (u,     v,     w)
/// ZMax   (v,     u,     S - w)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FaceSpace {
  face: Face,
  /// Chunk edge length in voxels.
  size: i32,
}

impl FaceSpace {
  pub fn new(face: Face, size: i32) -> Self {
    Self { face, size }
  }
}

impl CellSpace for FaceSpace {
  #[inline]
  fn to_chunk(&self, local: IVec3) -> IVec3 {
    let IVec3 { x: u, y: v, z: w } = local;
    let s = self.size;
    match self.face {
      Face::XMin => IVec3::new(w, u, v),
      Face::XMax => IVec3::new(s - w, v, u),
      Face::YMin => IVec3::new(v, w, u),
      Face::YMax => IVec3::new(u, s - w, v),
      Face::ZMin => IVec3::new(u, v, w),
      Face::ZMax => IVec3::new(v, u, s - w),
    }
  }

  #[inline]
  fn load(&self, caches: &VertexCaches, cell: IVec3, slot: usize) -> u32 {
    caches.face(self.face, cell)[slot]
  }

  #[inline]
  fn store(&self, caches: &mut VertexCaches, cell: IVec3, slot: usize, index: u32) {
    caches.face_mut(self.face, cell)[slot] = index;
  }
}

/// A `SamplingCache` seen through one cell space.
/// [`VoxelAccess`] over a sampling cache, with cell coordinates mapped
/// through `S`.
pub struct CacheView<'c, 'o, G, S> {
  cache: &'c mut SamplingCache<'o, G>,
  space: S,
}

impl<'c, 'o, G: FieldGenerator, S: CellSpace> CacheView<'c, 'o, G, S> {
  pub fn new(cache: &'c mut SamplingCache<'o, G>, space: S) -> Self {
    Self { cache, space }
  }
}

impl<G: FieldGenerator, S: CellSpace> VoxelAccess for CacheView<'_, '_, G, S> {
  #[inline]
  fn to_chunk(&self, local: IVec3) -> IVec3 {
    self.space.to_chunk(local)
  }

  #[inline]
  fn value(&self, local: IVec3) -> Density {
    self.cache.value(self.space.to_chunk(local))
  }

  #[inline]
  fn color(&self, local: IVec3) -> Rgba8 {
    self.cache.color(self.space.to_chunk(local))
  }

  #[inline]
  fn load_vertex(&self, cell: IVec3, slot: usize) -> Option<u32> {
    let index = self.space.load(self.cache.vertices(), cell, slot);
    (index != crate::constants::NO_VERTEX).then_some(index)
  }

  #[inline]
  fn save_vertex(&mut self, cell: IVec3, slot: usize, index: u32) {
    self.space.store(self.cache.vertices_mut(), cell, slot, index);
  }

  fn depth(&self) -> u32 {
    self.cache.key().depth
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn determinant(space: &FaceSpace) -> i32 {
    let origin = space.to_chunk(IVec3::ZERO);
    let u = space.to_chunk(IVec3::X) - origin;
    let v = space.to_chunk(IVec3::Y) - origin;
    let w = space.to_chunk(IVec3::Z) - origin;
    u.dot(v.cross(w))
  }

  #[test]
  fn test_face_frames_are_rotations() {
    for face in Face::ALL {
      let space = FaceSpace::new(face, 32);
      assert_eq!(determinant(&space), 1, "{:?} frame must preserve winding", face);
    }
  }

  #[test]
  fn test_face_frames_point_inward() {
    for face in Face::ALL {
      let space = FaceSpace::new(face, 32);
      let inward = space.to_chunk(IVec3::Z) - space.to_chunk(IVec3::ZERO);
      assert_eq!(inward, -face.outward(), "{:?} w must point into the chunk", face);
    }
  }

  #[test]
  fn test_face_frames_cover_the_face_plane() {
    for face in Face::ALL {
      let space = FaceSpace::new(face, 32);
      let plane = if face.is_max() { 32 } else { 0 };
      for (u, v) in [(0, 0), (32, 0), (0, 32), (32, 32), (7, 19)] {
        let p = space.to_chunk(IVec3::new(u, v, 0));
        assert_eq!(p[face.axis()], plane, "{:?} w = 0 lies on the face", face);
        assert!(
          p.cmpge(IVec3::ZERO).all() && p.cmple(IVec3::splat(32)).all(),
          "{:?} maps ({}, {}) outside the chunk: {:?}",
          face,
          u,
          v,
          p
        );
      }
    }
  }
}
