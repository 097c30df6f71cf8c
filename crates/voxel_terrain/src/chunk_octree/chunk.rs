//! Live chunk handles.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use glam::IVec3;

use crate::assembler::ChunkMesh;
use crate::constants::CHUNK_CELLS;
use crate::octree::OctreeCube;
use crate::types::FaceFlags;

/// Identity of a chunk: its minimum corner and depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkKey {
  /// Minimum corner in global voxel coordinates.
  pub origin: IVec3,
  pub depth: u32,
}

impl ChunkKey {
  /// Key of the chunk with minimum corner `origin` at `depth`.
  pub fn new(origin: IVec3, depth: u32) -> Self {
    Self { origin, depth }
  }

  /// Key of the chunk covering a chunk-octree cube.
  pub fn from_cube(cube: &OctreeCube) -> Self {
    Self::new(cube.min(), cube.depth)
  }

  /// Voxels between neighboring samples: `1 << depth`.
  #[inline]
  pub const fn step(&self) -> i32 {
    1 << self.depth
  }

  /// Chunk edge length in voxels: `16 << depth`.
  #[inline]
  pub const fn size(&self) -> i32 {
    CHUNK_CELLS << self.depth
  }

  /// Inverse of [`ChunkKey::from_cube`].
  pub fn cube(&self) -> OctreeCube {
    OctreeCube::new(self.origin + IVec3::splat(self.size() / 2), self.depth)
  }
}

/// A live chunk owned by one chunk-octree leaf.
///
/// Meshing jobs only hold a `Weak` to it, so unloading the chunk is enough
/// to make a late completion detectable.
#[derive(Debug)]
pub struct Chunk {
  key: ChunkKey,
  in_flight: AtomicBool,
  neighbor_flags: AtomicU8,
  mesh: Mutex<Option<Arc<ChunkMesh>>>,
}

impl Chunk {
  /// Idle chunk with no mesh and no finer neighbors.
  pub fn new(key: ChunkKey) -> Self {
    Self {
      key,
      in_flight: AtomicBool::new(false),
      neighbor_flags: AtomicU8::new(0),
      mesh: Mutex::new(None),
    }
  }

  pub fn key(&self) -> ChunkKey {
    self.key
  }

  /// True while a mesh job for this chunk is running.
  pub fn is_in_flight(&self) -> bool {
    self.in_flight.load(Ordering::Acquire)
  }

  /// Claim the chunk for a new job. Returns false if one is already running.
  pub fn try_begin_job(&self) -> bool {
    self
      .in_flight
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
  }

  /// Release the claim taken by [`Chunk::try_begin_job`].
  pub fn finish_job(&self) {
    self.in_flight.store(false, Ordering::Release);
  }

  /// Faces whose neighbor was finer at the last LOD update.
  pub fn neighbor_flags(&self) -> FaceFlags {
    FaceFlags(self.neighbor_flags.load(Ordering::Acquire))
  }

  /// Store new flags, returning true if they changed.
  pub fn set_neighbor_flags(&self, flags: FaceFlags) -> bool {
    self.neighbor_flags.swap(flags.0, Ordering::AcqRel) != flags.0
  }

  /// Last mesh applied to this chunk.
  pub fn mesh(&self) -> Option<Arc<ChunkMesh>> {
    self.mesh.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Replace the applied mesh.
  pub fn set_mesh(&self, mesh: Arc<ChunkMesh>) {
    *self.mesh.lock().unwrap_or_else(PoisonError::into_inner) = Some(mesh);
  }
}
