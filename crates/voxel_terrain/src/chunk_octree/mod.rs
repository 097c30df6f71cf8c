//! ChunkOctree - decides which regions own a live mesh, and at which depth.
//!
//! Nodes live in an arena with a free list. Every node is either split into
//! 8 children or owns at most one chunk. `create_tree` walks the whole tree
//! for a camera position:
//!
//! ```text
//! depth == 0 || distance(camera, center) > width * scale * factor
//!   ├─ yes → keep / spawn one chunk here, release any children
//!   └─ no  → unload the chunk here, split, recurse into the 8 children
//! ```

pub mod chunk;
pub mod config;

use std::sync::Arc;

use glam::{DVec3, IVec3};
use tracing::debug;

use crate::octree::OctreeCube;
use crate::types::{Face, FaceFlags};
pub use chunk::{Chunk, ChunkKey};
pub use config::ChunkOctreeConfig;

type NodeId = u32;

#[derive(Debug)]
enum NodeState {
  /// Freshly allocated or released node.
  Empty,
  Chunk(Arc<Chunk>),
  Split([NodeId; 8]),
}

#[derive(Debug)]
struct ChunkNode {
  cube: OctreeCube,
  state: NodeState,
}

/// Chunks created and destroyed by one `create_tree` pass.
#[derive(Debug, Default)]
pub struct TreeUpdate {
  pub spawned: Vec<Arc<Chunk>>,
  pub unloaded: Vec<ChunkKey>,
}

/// LOD octree over chunks. Only touched from the main thread.
pub struct ChunkOctree {
  nodes: Vec<ChunkNode>,
  free: Vec<NodeId>,
  config: ChunkOctreeConfig,
  built: bool,
}

impl ChunkOctree {
  /// Unbuilt tree over the same root cube as a value octree of `depth`.
  pub fn new(depth: u32, config: ChunkOctreeConfig) -> Self {
    Self {
      nodes: vec![ChunkNode {
        cube: OctreeCube::root(depth),
        state: NodeState::Empty,
      }],
      free: Vec::new(),
      config,
      built: false,
    }
  }

  pub fn config(&self) -> &ChunkOctreeConfig {
    &self.config
  }

  /// Cube covering the whole world.
  pub fn root(&self) -> OctreeCube {
    self.nodes[0].cube
  }

  /// Rebuild the LOD decomposition around `camera` (world units).
  #[cfg_attr(
    feature = "instrument",
    tracing::instrument(skip_all, name = "chunk_octree::create_tree")
  )]
  pub fn create_tree(&mut self, camera: DVec3) -> TreeUpdate {
    let mut update = TreeUpdate::default();
    self.update_node(0, camera, &mut update);
    self.built = true;
    debug!(
      spawned = update.spawned.len(),
      unloaded = update.unloaded.len(),
      free_nodes = self.free.len(),
      "chunk octree updated"
    );
    update
  }

  fn update_node(&mut self, id: NodeId, camera: DVec3, update: &mut TreeUpdate) {
    let cube = self.nodes[id as usize].cube;
    let previous = std::mem::replace(&mut self.nodes[id as usize].state, NodeState::Empty);

    if self.config.is_leaf(&cube, camera) {
      let chunk = match previous {
        NodeState::Chunk(chunk) => chunk,
        NodeState::Split(children) => {
          for child in children {
            self.release(child, update);
          }
          self.spawn(&cube, update)
        }
        NodeState::Empty => self.spawn(&cube, update),
      };
      self.nodes[id as usize].state = NodeState::Chunk(chunk);
      return;
    }

    let children = match previous {
      NodeState::Split(children) => children,
      NodeState::Chunk(chunk) => {
        debug!(key = ?chunk.key(), "unloading chunk for split");
        update.unloaded.push(chunk.key());
        self.allocate_children(&cube)
      }
      NodeState::Empty => self.allocate_children(&cube),
    };
    self.nodes[id as usize].state = NodeState::Split(children);
    for child in children {
      self.update_node(child, camera, update);
    }
  }

  fn spawn(&mut self, cube: &OctreeCube, update: &mut TreeUpdate) -> Arc<Chunk> {
    let chunk = Arc::new(Chunk::new(ChunkKey::from_cube(cube)));
    debug!(key = ?chunk.key(), "spawning chunk");
    update.spawned.push(Arc::clone(&chunk));
    chunk
  }

  fn allocate_children(&mut self, cube: &OctreeCube) -> [NodeId; 8] {
    let mut children = [0; 8];
    for (octant, slot) in children.iter_mut().enumerate() {
      let Some(child) = cube.child(octant) else {
        unreachable!("split requested at depth 0");
      };
      let node = ChunkNode {
        cube: child,
        state: NodeState::Empty,
      };
      *slot = match self.free.pop() {
        Some(id) => {
          self.nodes[id as usize] = node;
          id
        }
        None => {
          self.nodes.push(node);
          (self.nodes.len() - 1) as NodeId
        }
      };
    }
    children
  }

  /// Return a subtree to the free list, unloading its chunks.
  fn release(&mut self, id: NodeId, update: &mut TreeUpdate) {
    match std::mem::replace(&mut self.nodes[id as usize].state, NodeState::Empty) {
      NodeState::Chunk(chunk) => {
        debug!(key = ?chunk.key(), "unloading chunk for merge");
        update.unloaded.push(chunk.key());
      }
      NodeState::Split(children) => {
        for child in children {
          self.release(child, update);
        }
      }
      NodeState::Empty => {}
    }
    self.free.push(id);
  }

  /// Chunk owning `position`, or None outside the world / before the first
  /// build.
  pub fn get_chunk(&self, position: IVec3) -> Option<&Arc<Chunk>> {
    if !self.built || !self.root().contains(position) {
      return None;
    }
    let mut node = &self.nodes[0];
    loop {
      match &node.state {
        NodeState::Chunk(chunk) => return Some(chunk),
        NodeState::Split(children) => {
          node = &self.nodes[children[node.cube.octant(position)] as usize];
        }
        NodeState::Empty => panic!(
          "chunk octree node {:?} is neither a chunk leaf nor split",
          node.cube
        ),
      }
    }
  }

  /// Every live chunk.
  pub fn leaves(&self) -> impl Iterator<Item = &Arc<Chunk>> {
    self.nodes.iter().filter_map(|node| match &node.state {
      NodeState::Chunk(chunk) => Some(chunk),
      _ => None,
    })
  }

  /// Live chunks intersecting the half-open box `[min, max)`.
  pub fn chunks_overlapping(&self, min: IVec3, max: IVec3) -> Vec<Arc<Chunk>> {
    self
      .leaves()
      .filter(|chunk| {
        let cube = chunk.key().cube();
        cube.min().cmplt(max).all() && cube.max().cmpgt(min).all()
      })
      .cloned()
      .collect()
  }

  /// Faces of `key` whose neighbor across the face is a finer chunk.
  ///
  /// Probes the voxel just outside each face center. Faces on the world
  /// boundary report no neighbor.
  pub fn finer_neighbor_flags(&self, key: ChunkKey) -> FaceFlags {
    let size = key.size();
    let center = key.origin + IVec3::splat(size / 2);
    let mut flags = FaceFlags::NONE;
    for face in Face::ALL {
      let mut probe = center;
      let axis = face.axis();
      probe[axis] = if face.is_max() {
        key.origin[axis] + size
      } else {
        key.origin[axis] - 1
      };
      if let Some(neighbor) = self.get_chunk(probe) {
        if neighbor.key().depth < key.depth {
          flags.insert(face);
        }
      }
    }
    flags
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
