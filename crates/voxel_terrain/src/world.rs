//! VoxelWorld - one terrain: density storage, LOD chunks and meshing jobs.
//!
//! Everything here runs on the controlling thread. Meshing jobs only share
//! the value octree (read) and a `Weak` to their chunk.
//!
//! ```text
//! update_camera_position ──► ChunkOctree::create_tree
//!                                 │ spawned / flags changed
//! set_value, add, ... ──► queue ◄─┘
//!                           │ apply_queued_updates
//!                           ▼
//!                      MeshingStage ──► poll_completions ──► MeshSink
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use glam::{DVec3, IVec3};
use tracing::{debug, warn};

use crate::assembler::ChunkMesh;
use crate::chunk_octree::{Chunk, ChunkKey, ChunkOctree, ChunkOctreeConfig};
use crate::constants::{LEAF_SIZE, MAX_OCTREE_DEPTH};
use crate::error::{Result, TerrainError};
use crate::generator::FieldGenerator;
use crate::task_queue::{MeshCompletion, MeshRequest, MeshingStage};
use crate::types::{Density, MeshConfig, Rgba8};
use crate::value_octree::{SavedLeaf, ValueOctree};

// =============================================================================
// WorldId - unique identifier
// =============================================================================

static WORLD_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque world identifier, unique within the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WorldId(u64);

impl WorldId {
  /// Next unused id.
  pub fn new() -> Self {
    Self(WORLD_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Numeric value, for logs and external handles.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

impl Default for WorldId {
  fn default() -> Self {
    Self::new()
  }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration of a whole world.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
  /// Depth of both octrees. The world spans `16 << depth` voxels per axis.
  pub depth: u32,
  pub chunk: ChunkOctreeConfig,
  pub mesh: MeshConfig,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      depth: 4,
      chunk: ChunkOctreeConfig::default(),
      mesh: MeshConfig::default(),
    }
  }
}

impl WorldConfig {
  /// Same as [`WorldConfig::default`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the octree depth.
  pub fn with_depth(mut self, depth: u32) -> Self {
    self.depth = depth;
    self
  }

  /// Set the LOD configuration.
  pub fn with_chunk(mut self, chunk: ChunkOctreeConfig) -> Self {
    self.chunk = chunk;
    self
  }

  /// Set the meshing configuration.
  pub fn with_mesh(mut self, mesh: MeshConfig) -> Self {
    self.mesh = mesh;
    self
  }

  /// Check the depth and both nested configurations.
  ///
  /// Fails with [`TerrainError::InvalidConfig`] naming the first bad field.
  pub fn validate(&self) -> Result<()> {
    if self.depth > MAX_OCTREE_DEPTH {
      return Err(TerrainError::InvalidConfig {
        field: "depth",
        reason: format!("must be at most {}, got {}", MAX_OCTREE_DEPTH, self.depth),
      });
    }
    self.chunk.validate()?;
    self.mesh.validate()
  }
}

// =============================================================================
// MeshSink - renderer side
// =============================================================================

/// Receives chunk meshes on the controlling thread.
pub trait MeshSink {
  /// A live chunk finished meshing. Replaces any earlier mesh for the key.
  fn chunk_meshed(&mut self, mesh: &Arc<ChunkMesh>);

  /// A chunk left the LOD tree. Its mesh should be removed.
  fn chunk_unloaded(&mut self, key: ChunkKey);
}

/// Sink that keeps the latest mesh of every live chunk.
#[derive(Debug, Default)]
pub struct MeshStore {
  pub meshes: HashMap<ChunkKey, Arc<ChunkMesh>>,
}

impl MeshSink for MeshStore {
  fn chunk_meshed(&mut self, mesh: &Arc<ChunkMesh>) {
    self.meshes.insert(mesh.key, Arc::clone(mesh));
  }

  fn chunk_unloaded(&mut self, key: ChunkKey) {
    self.meshes.remove(&key);
  }
}

// =============================================================================
// VoxelWorld<G>
// =============================================================================

/// A terrain world over the default field `G`.
pub struct VoxelWorld<G> {
  id: WorldId,
  config: WorldConfig,
  octree: Arc<ValueOctree<G>>,
  chunks: ChunkOctree,
  meshing: MeshingStage,
  /// Chunks waiting for a mesh job, newest handle per key.
  queued: HashMap<ChunkKey, Weak<Chunk>>,
  /// Unloads not yet reported to a sink.
  unloaded: Vec<ChunkKey>,
}

impl<G: FieldGenerator + 'static> VoxelWorld<G> {
  /// Validate `config` and build an empty world over `generator`.
  ///
  /// No chunk exists until the first [`VoxelWorld::update_camera_position`].
  pub fn new(config: WorldConfig, generator: G) -> Result<Self> {
    config.validate()?;
    let octree = Arc::new(ValueOctree::new(config.depth, generator)?);
    let chunks = ChunkOctree::new(config.depth, config.chunk.clone());
    debug!(depth = config.depth, width = octree.width(), "world created");
    Ok(Self {
      id: WorldId::new(),
      config,
      octree,
      chunks,
      meshing: MeshingStage::new(),
      queued: HashMap::new(),
      unloaded: Vec::new(),
    })
  }

  pub fn id(&self) -> WorldId {
    self.id
  }

  /// Configuration the world was built with.
  pub fn config(&self) -> &WorldConfig {
    &self.config
  }

  /// Density storage shared with meshing jobs.
  pub fn octree(&self) -> &Arc<ValueOctree<G>> {
    &self.octree
  }

  /// Current LOD tree.
  pub fn chunks(&self) -> &ChunkOctree {
    &self.chunks
  }

  /// True if `position` lies inside the world cube.
  pub fn is_in_world(&self, position: IVec3) -> bool {
    self.octree.is_in_world(position)
  }

  /// Density at `position`, edits included. Out-of-world reads return 0.
  pub fn get_value(&self, position: IVec3) -> Density {
    self.octree.get_value(position)
  }

  /// Color at `position`, edits included.
  pub fn get_color(&self, position: IVec3) -> Rgba8 {
    self.octree.get_color(position)
  }

  /// Live chunk owning `position`.
  pub fn chunk_at(&self, position: IVec3) -> Option<&Arc<Chunk>> {
    self.chunks.get_chunk(position)
  }

  /// Chunks waiting for a job.
  pub fn queued_count(&self) -> usize {
    self.queued.len()
  }

  /// True when nothing is queued or meshing.
  pub fn is_idle(&self) -> bool {
    self.queued.is_empty() && self.meshing.is_idle()
  }

  // ===========================================================================
  // LOD
  // ===========================================================================

  /// Rebuild the chunk tree around `camera` (world units) and start jobs for
  /// new chunks and chunks whose finer-neighbor faces changed.
  pub fn update_camera_position(&mut self, camera: DVec3) {
    let update = self.chunks.create_tree(camera);
    self.unloaded.extend(update.unloaded);
    for chunk in &update.spawned {
      self.queue_chunk(chunk);
    }

    let leaves: Vec<Arc<Chunk>> = self.chunks.leaves().cloned().collect();
    for chunk in &leaves {
      let flags = self.chunks.finer_neighbor_flags(chunk.key());
      if chunk.set_neighbor_flags(flags) {
        self.queue_chunk(chunk);
      }
    }
    self.apply_queued_updates();
  }

  // ===========================================================================
  // Edits
  // ===========================================================================

  /// Set the density at `position` and queue every chunk that samples it.
  pub fn set_value(&mut self, position: IVec3, value: i32) -> Result<()> {
    self.octree.set_value(position, value)?;
    self.queue_update(position);
    Ok(())
  }

  /// Set the color at `position` and queue the affected chunks.
  pub fn set_color(&mut self, position: IVec3, color: Rgba8) -> Result<()> {
    self.octree.set_color(position, color)?;
    self.queue_update(position);
    Ok(())
  }

  /// Push the density toward solid.
  pub fn add(&mut self, position: IVec3, strength: i32) -> Result<()> {
    self.octree.add(position, strength)?;
    self.queue_update(position);
    Ok(())
  }

  /// Push the density toward air.
  pub fn remove(&mut self, position: IVec3, strength: i32) -> Result<()> {
    self.octree.remove(position, strength)?;
    self.queue_update(position);
    Ok(())
  }

  /// Queue every chunk that samples `position`: its owner, and the chunks
  /// that read it as a boundary or halo sample.
  pub fn queue_update(&mut self, position: IVec3) {
    if !self.is_in_world(position) {
      warn!(?position, "update requested outside the world");
      return;
    }
    self.queue_region(position, position);
  }

  /// Queue every chunk whose sampled region meets the inclusive box
  /// `[min, max]`.
  fn queue_region(&mut self, min: IVec3, max: IVec3) {
    // No chunk reads further out than one step of the coarsest chunk.
    let margin = IVec3::splat(1 << self.config.depth);
    let candidates = self.chunks.chunks_overlapping(min - margin, max + margin + IVec3::ONE);
    for chunk in candidates {
      let key = chunk.key();
      let step = IVec3::splat(key.step());
      let sampled_min = key.origin - step;
      let sampled_max = key.origin + IVec3::splat(key.size()) + step;
      if sampled_min.cmple(max).all() && sampled_max.cmpge(min).all() {
        self.queue_chunk(&chunk);
      }
    }
  }

  /// Queue every live chunk.
  pub fn update_all(&mut self) {
    let leaves: Vec<Arc<Chunk>> = self.chunks.leaves().cloned().collect();
    for chunk in &leaves {
      self.queue_chunk(chunk);
    }
  }

  fn queue_chunk(&mut self, chunk: &Arc<Chunk>) {
    self.queued.insert(chunk.key(), Arc::downgrade(chunk));
  }

  /// Start a job for every queued chunk that is alive and idle. Chunks with
  /// a job in flight stay queued.
  pub fn apply_queued_updates(&mut self) {
    let queued = std::mem::take(&mut self.queued);
    for (key, handle) in queued {
      let Some(chunk) = handle.upgrade() else {
        continue;
      };
      if !chunk.try_begin_job() {
        self.queued.insert(key, handle);
        continue;
      }
      let finer = chunk.neighbor_flags();
      debug!(?key, ?finer, "mesh job spawned");
      self.meshing.enqueue(MeshRequest {
        chunk: handle,
        key,
        finer,
        octree: Arc::clone(&self.octree),
        config: self.config.mesh.clone(),
      });
    }
  }

  // ===========================================================================
  // Completions
  // ===========================================================================

  /// Report unloads and finished meshes to `sink`, then start jobs for
  /// chunks that were waiting on one. Returns the meshes delivered.
  pub fn poll_completions(&mut self, sink: &mut impl MeshSink) -> usize {
    let completions = self.meshing.drain_completions();
    self.deliver(completions, sink)
  }

  /// Block until every queued and running job is done, delivering results
  /// as they arrive.
  pub fn flush(&mut self, sink: &mut impl MeshSink) -> usize {
    let mut delivered = 0;
    loop {
      self.apply_queued_updates();
      let completions = self.meshing.wait_completions();
      delivered += self.deliver(completions, sink);
      if self.is_idle() {
        return delivered;
      }
    }
  }

  fn deliver(&mut self, completions: Vec<MeshCompletion>, sink: &mut impl MeshSink) -> usize {
    for key in self.unloaded.drain(..) {
      sink.chunk_unloaded(key);
    }

    let mut delivered = 0;
    for completion in completions {
      let Some(chunk) = completion.chunk.upgrade() else {
        warn!(key = ?completion.key, "mesh completed for an unloaded chunk, dropping");
        continue;
      };
      chunk.finish_job();
      let Some(mesh) = completion.mesh else {
        continue;
      };
      debug!(
        key = ?completion.key,
        mesh_time_us = completion.mesh_time_us,
        triangles = mesh.mesh.triangle_count(),
        "chunk meshed"
      );
      let mesh = Arc::new(mesh);
      chunk.set_mesh(Arc::clone(&mesh));
      sink.chunk_meshed(&mesh);
      delivered += 1;
    }

    if !self.queued.is_empty() {
      self.apply_queued_updates();
    }
    delivered
  }

  // ===========================================================================
  // Persistence
  // ===========================================================================

  /// Dense data of every edited leaf.
  pub fn save(&self) -> Vec<SavedLeaf> {
    self.octree.save()
  }

  /// Restore saved leaves and queue the chunks they touch. With `reset`,
  /// every leaf returns to the default field first and all chunks re-mesh.
  pub fn load(&mut self, data: &[SavedLeaf], reset: bool) -> Result<()> {
    let restored = self.octree.load(data, reset)?;
    if reset {
      self.update_all();
      return Ok(());
    }
    let half = IVec3::splat(LEAF_SIZE / 2);
    for center in restored {
      self.queue_region(center - half, center + half - IVec3::ONE);
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
