//! SamplingCache - per-job density snapshot and vertex reuse caches.
//!
//! A meshing job copies the chunk's 18³ lattice window (16 cells plus a
//! one-sample halo) out of the value octree once, up front. Reads that fall
//! outside the window or between lattice points (bisection midpoints,
//! transition half-steps) go to the octree directly.
//!
//! Vertex caches:
//! - two `[18][18][4]` Z-slices for regular cells, swapped per slice;
//! - six `[16][16][10]` face caches for transition cells.

pub mod access;

use glam::IVec3;

use crate::chunk_octree::ChunkKey;
use crate::constants::{
  window_index, CHUNK_CELLS, FIRST_CELL, NO_VERTEX, REGULAR_CACHE_SLOTS, TRANSITION_CACHE_SLOTS,
  WINDOW_MAX, WINDOW_MIN, WINDOW_SIZE, WINDOW_SIZE_CB,
};
use crate::generator::FieldGenerator;
use crate::types::{Density, Face, FaceFlags, Rgba8};
use crate::value_octree::ValueOctree;
pub use access::{CacheView, CellSpace, FaceSpace, RegularSpace, VoxelAccess};

const REGULAR_SLICE_CELLS: usize = WINDOW_SIZE * WINDOW_SIZE;
const FACE_CELLS: usize = (CHUNK_CELLS * CHUNK_CELLS) as usize;

type RegularSlice = Box<[[u32; REGULAR_CACHE_SLOTS]]>;
type FaceCache = Box<[[u32; TRANSITION_CACHE_SLOTS]]>;

/// Vertex-index caches of one meshing job.
pub struct VertexCaches {
  current: RegularSlice,
  previous: RegularSlice,
  current_z: i32,
  faces: [FaceCache; 6],
}

impl VertexCaches {
  fn new() -> Self {
    let slice = || vec![[NO_VERTEX; REGULAR_CACHE_SLOTS]; REGULAR_SLICE_CELLS].into_boxed_slice();
    let face = || vec![[NO_VERTEX; TRANSITION_CACHE_SLOTS]; FACE_CELLS].into_boxed_slice();
    Self {
      current: slice(),
      previous: slice(),
      current_z: FIRST_CELL - 1,
      faces: [face(), face(), face(), face(), face(), face()],
    }
  }

  /// Start a new Z-slice: the current slice becomes the previous one and
  /// the recycled buffer is cleared.
  pub fn begin_slice(&mut self, z: i32) {
    std::mem::swap(&mut self.current, &mut self.previous);
    self.current.fill([NO_VERTEX; REGULAR_CACHE_SLOTS]);
    self.current_z = z;
  }

  #[inline]
  fn regular_index(cell: IVec3) -> usize {
    (cell.x - FIRST_CELL) as usize + (cell.y - FIRST_CELL) as usize * WINDOW_SIZE
  }

  #[inline]
  pub fn regular(&self, cell: IVec3) -> &[u32; REGULAR_CACHE_SLOTS] {
    let slice = if cell.z == self.current_z {
      &self.current
    } else {
      assert_eq!(
        cell.z,
        self.current_z - 1,
        "regular cache only holds the current and previous slice"
      );
      &self.previous
    };
    &slice[Self::regular_index(cell)]
  }

  #[inline]
  pub fn regular_mut(&mut self, cell: IVec3) -> &mut [u32; REGULAR_CACHE_SLOTS] {
    let index = Self::regular_index(cell);
    if cell.z == self.current_z {
      &mut self.current[index]
    } else {
      assert_eq!(
        cell.z,
        self.current_z - 1,
        "regular cache only holds the current and previous slice"
      );
      &mut self.previous[index]
    }
  }

  #[inline]
  fn face_index(cell: IVec3) -> usize {
    debug_assert!((0..CHUNK_CELLS).contains(&cell.x) && (0..CHUNK_CELLS).contains(&cell.y));
    (cell.x + cell.y * CHUNK_CELLS) as usize
  }

  #[inline]
  pub fn face(&self, face: Face, cell: IVec3) -> &[u32; TRANSITION_CACHE_SLOTS] {
    &self.faces[face as usize][Self::face_index(cell)]
  }

  #[inline]
  pub fn face_mut(&mut self, face: Face, cell: IVec3) -> &mut [u32; TRANSITION_CACHE_SLOTS] {
    &mut self.faces[face as usize][Self::face_index(cell)]
  }
}

/// Snapshot of one chunk's density neighborhood.
pub struct SamplingCache<'o, G> {
  octree: &'o ValueOctree<G>,
  key: ChunkKey,
  finer: FaceFlags,
  values: Box<[Density]>,
  colors: Box<[Rgba8]>,
  homogeneous: bool,
  vertices: VertexCaches,
}

impl<'o, G: FieldGenerator> SamplingCache<'o, G> {
  /// Copy the chunk's lattice window out of `octree`.
  pub fn new(octree: &'o ValueOctree<G>, key: ChunkKey, finer: FaceFlags) -> Self {
    let step = key.step();
    let mut values = Vec::with_capacity(WINDOW_SIZE_CB);
    let mut colors = Vec::with_capacity(WINDOW_SIZE_CB);
    for z in WINDOW_MIN..=WINDOW_MAX {
      for y in WINDOW_MIN..=WINDOW_MAX {
        for x in WINDOW_MIN..=WINDOW_MAX {
          let global = key.origin + IVec3::new(x, y, z) * step;
          values.push(octree.sample_value(global));
          colors.push(octree.sample_color(global));
        }
      }
    }
    let solid = values[0] < 0;
    let homogeneous = values.iter().all(|&v| (v < 0) == solid);

    Self {
      octree,
      key,
      finer,
      values: values.into_boxed_slice(),
      colors: colors.into_boxed_slice(),
      homogeneous,
      vertices: VertexCaches::new(),
    }
  }

  pub fn key(&self) -> ChunkKey {
    self.key
  }

  /// Faces bordering a finer chunk.
  pub fn finer(&self) -> FaceFlags {
    self.finer
  }

  /// True if every window sample has the same sign.
  pub fn is_homogeneous(&self) -> bool {
    self.homogeneous
  }

  pub fn vertices(&self) -> &VertexCaches {
    &self.vertices
  }

  pub fn vertices_mut(&mut self) -> &mut VertexCaches {
    &mut self.vertices
  }

  /// Window index of a chunk-local position, if it is a snapshotted sample.
  #[inline]
  fn window_slot(&self, local: IVec3) -> Option<usize> {
    let step = self.key.step();
    if (local % step) != IVec3::ZERO {
      return None;
    }
    let lattice = local / step;
    let inside = lattice.cmpge(IVec3::splat(WINDOW_MIN)).all()
      && lattice.cmple(IVec3::splat(WINDOW_MAX)).all();
    inside.then(|| window_index(lattice.x, lattice.y, lattice.z))
  }

  /// Density at a chunk-local voxel position.
  #[inline]
  pub fn value(&self, local: IVec3) -> Density {
    match self.window_slot(local) {
      Some(i) => self.values[i],
      None => self.octree.sample_value(self.key.origin + local),
    }
  }

  /// Color at a chunk-local voxel position.
  #[inline]
  pub fn color(&self, local: IVec3) -> Rgba8 {
    match self.window_slot(local) {
      Some(i) => self.colors[i],
      None => self.octree.sample_color(self.key.origin + local),
    }
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
