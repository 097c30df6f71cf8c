//! Background meshing jobs.
//!
//! Following the IStage pattern: Enqueue → (rayon) → Completions
//!
//! ```text
//! Main Thread                      rayon pool
//! ┌──────────────┐
//! │ enqueue()    │── MeshRequest ─► mesh_chunk()
//! └──────────────┘                      │
//! ┌──────────────┐                      │
//! │ drain_       │◄── MeshCompletion ───┘
//! │ completions()│
//! └──────────────┘
//! ```
//!
//! Jobs hold a `Weak` to their chunk. A chunk unloaded before its job starts
//! costs nothing; one unloaded while meshing is dropped when drained.

use std::sync::{Arc, Weak};

use crossbeam_channel::{self as channel, Receiver, Sender};
use tracing::debug;
use web_time::Instant;

use crate::assembler::{mesh_chunk, ChunkMesh};
use crate::chunk_octree::{Chunk, ChunkKey};
use crate::generator::FieldGenerator;
use crate::types::{FaceFlags, MeshConfig};
use crate::value_octree::ValueOctree;

/// Everything a worker needs to mesh one chunk.
pub struct MeshRequest<G> {
  pub chunk: Weak<Chunk>,
  pub key: ChunkKey,
  /// Faces bordering a finer chunk when the job was queued.
  pub finer: FaceFlags,
  pub octree: Arc<ValueOctree<G>>,
  pub config: MeshConfig,
}

/// Completed meshing job.
pub struct MeshCompletion {
  pub chunk: Weak<Chunk>,
  pub key: ChunkKey,
  /// None when the chunk was gone before the job started.
  pub mesh: Option<ChunkMesh>,
  /// Raw meshing time in microseconds
  pub mesh_time_us: u64,
}

/// Meshing stage that runs requests on rayon's thread pool.
pub struct MeshingStage {
  sender: Sender<MeshCompletion>,
  receiver: Receiver<MeshCompletion>,
  /// Jobs spawned and not yet drained.
  in_flight: usize,
}

impl Default for MeshingStage {
  fn default() -> Self {
    Self::new()
  }
}

impl MeshingStage {
  /// Idle stage with an empty completion channel.
  pub fn new() -> Self {
    let (sender, receiver) = channel::unbounded();
    Self {
      sender,
      receiver,
      in_flight: 0,
    }
  }

  /// Spawn a meshing job (non-blocking).
  pub fn enqueue<G: FieldGenerator + 'static>(&mut self, request: MeshRequest<G>) {
    self.in_flight += 1;
    let sender = self.sender.clone();
    rayon::spawn(move || {
      let completion = run(request);
      // The stage owns a receiver for as long as it can send.
      let _ = sender.send(completion);
    });
  }

  /// Take every completion that is ready (non-blocking).
  pub fn drain_completions(&mut self) -> Vec<MeshCompletion> {
    let completions: Vec<MeshCompletion> = self.receiver.try_iter().collect();
    self.in_flight -= completions.len();
    completions
  }

  /// Block until every spawned job has completed, then take them all.
  pub fn wait_completions(&mut self) -> Vec<MeshCompletion> {
    let mut completions = Vec::with_capacity(self.in_flight);
    while completions.len() < self.in_flight {
      match self.receiver.recv() {
        Ok(completion) => completions.push(completion),
        Err(_) => break,
      }
    }
    self.in_flight -= completions.len();
    completions
  }

  /// Jobs spawned and not yet drained.
  pub fn in_flight_count(&self) -> usize {
    self.in_flight
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.in_flight == 0
  }
}

fn run<G: FieldGenerator>(request: MeshRequest<G>) -> MeshCompletion {
  let MeshRequest {
    chunk,
    key,
    finer,
    octree,
    config,
  } = request;

  if chunk.strong_count() == 0 {
    debug!(?key, "chunk unloaded before meshing, skipping");
    return MeshCompletion {
      chunk,
      key,
      mesh: None,
      mesh_time_us: 0,
    };
  }

  let start = Instant::now();
  let mesh = mesh_chunk(&octree, key, finer, &config);
  let mesh_time_us = start.elapsed().as_micros() as u64;
  MeshCompletion {
    chunk,
    key,
    mesh: Some(mesh),
    mesh_time_us,
  }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;
