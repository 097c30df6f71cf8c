//! ValueOctree - sparse density and color storage over a procedural field.
//!
//! The tree is split eagerly down to 16³-voxel leaves when it is built, so
//! its shape never changes afterwards. A leaf starts clean and forwards every
//! read to the [`FieldGenerator`]. The first write materializes the whole
//! leaf into dense arrays under that leaf's write lock, which makes the
//! octree safe to read from any number of meshing jobs while the main thread
//! edits it.
//!
//! ```text
//! get_value(p)
//!   root ──octant(p)──► split ──octant(p)──► leaf
//!                                             ├─ clean → generator.default_value(p)
//!                                             └─ dirty → values[x + 16y + 256z]
//! ```

pub mod node;

use glam::IVec3;
use tracing::{debug, warn};

use crate::constants::{leaf_index, LEAF_VOLUME, MAX_OCTREE_DEPTH};
use crate::error::{Result, TerrainError};
use crate::generator::FieldGenerator;
use crate::octree::OctreeCube;
use crate::types::{density, Density, Rgba8};
use node::{DenseBlock, LeafCell, NodeId, NodeKind, ValueNode};

/// Color returned for reads outside the world.
const DEFAULT_COLOR: Rgba8 = [0, 0, 0, 0];

/// One dirty leaf in persisted form.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedLeaf {
  /// Center of the leaf in global voxel coordinates.
  pub position: IVec3,
  /// Dense densities, `x + 16y + 256z` order.
  pub values: Vec<Density>,
  /// Dense colors, same order as `values`.
  pub colors: Vec<Rgba8>,
}

/// Sparse density field with lazy per-leaf materialization.
pub struct ValueOctree<G> {
  nodes: Vec<ValueNode>,
  generator: G,
  depth: u32,
}

impl<G: FieldGenerator> ValueOctree<G> {
  /// Build a tree of the given depth over `generator`.
  pub fn new(depth: u32, generator: G) -> Result<Self> {
    if depth > MAX_OCTREE_DEPTH {
      return Err(TerrainError::InvalidConfig {
        field: "depth",
        reason: format!("value octree depth {} exceeds {}", depth, MAX_OCTREE_DEPTH),
      });
    }
    let mut octree = Self {
      nodes: Vec::new(),
      generator,
      depth,
    };
    octree.create_tree();
    Ok(octree)
  }

  /// Split the whole tree down to depth-0 leaves.
  #[cfg_attr(
    feature = "instrument",
    tracing::instrument(skip_all, name = "value_octree::create_tree")
  )]
  fn create_tree(&mut self) {
    self.nodes.clear();
    self.nodes.push(ValueNode::leaf(OctreeCube::root(self.depth)));
    let mut stack: Vec<NodeId> = vec![0];
    while let Some(id) = stack.pop() {
      let cube = self.nodes[id as usize].cube;
      if cube.depth == 0 {
        continue;
      }
      let mut children = [0; 8];
      for (octant, child) in children.iter_mut().enumerate() {
        let Some(child_cube) = cube.child(octant) else {
          unreachable!("depth > 0 cubes always have children");
        };
        *child = self.nodes.len() as NodeId;
        self.nodes.push(ValueNode::leaf(child_cube));
        stack.push(*child);
      }
      self.nodes[id as usize].kind = NodeKind::Split(children);
    }
    debug!(
      depth = self.depth,
      nodes = self.nodes.len(),
      "value octree created"
    );
  }

  /// Levels between the root and the 16³ leaves.
  pub fn depth(&self) -> u32 {
    self.depth
  }

  /// World edge length in voxels.
  pub fn width(&self) -> i32 {
    self.root().width()
  }

  /// Field that clean leaves read through to.
  pub fn generator(&self) -> &G {
    &self.generator
  }

  fn root(&self) -> OctreeCube {
    self.nodes[0].cube
  }

  /// True if `position` lies inside the root cube.
  pub fn is_in_world(&self, position: IVec3) -> bool {
    self.root().contains(position)
  }

  /// Descend to the leaf owning `position`.
  fn find_leaf(&self, position: IVec3) -> Option<(&ValueNode, &LeafCell)> {
    let mut node = &self.nodes[0];
    if !node.cube.contains(position) {
      return None;
    }
    loop {
      match &node.kind {
        NodeKind::Leaf(cell) => return Some((node, cell)),
        NodeKind::Split(children) => {
          let child = &self.nodes[children[node.cube.octant(position)] as usize];
          assert!(
            child.cube.contains(position),
            "octant descent left the node: {:?} not in {:?}",
            position,
            child.cube
          );
          node = child;
        }
      }
    }
  }

  #[inline]
  fn local_index(node: &ValueNode, position: IVec3) -> usize {
    let local = position - node.cube.min();
    leaf_index(local.x, local.y, local.z)
  }

  // ===========================================================================
  // Reads
  // ===========================================================================

  /// Density at a global position. Out-of-world reads log and return 0.
  pub fn get_value(&self, position: IVec3) -> Density {
    match self.find_leaf(position) {
      Some((node, cell)) => match cell.read().as_deref() {
        Some(block) => block.values[Self::local_index(node, position)],
        None => self.generator.default_value(position),
      },
      None => {
        warn!(?position, "value query outside the world");
        0
      }
    }
  }

  /// Color at a global position. Out-of-world reads log and return black.
  pub fn get_color(&self, position: IVec3) -> Rgba8 {
    match self.find_leaf(position) {
      Some((node, cell)) => match cell.read().as_deref() {
        Some(block) => block.colors[Self::local_index(node, position)],
        None => self.generator.default_color(position),
      },
      None => {
        warn!(?position, "color query outside the world");
        DEFAULT_COLOR
      }
    }
  }

  /// Density for meshing. Positions beyond the world read the default field
  /// so halo samples at the world edge stay continuous.
  #[inline]
  pub fn sample_value(&self, position: IVec3) -> Density {
    match self.find_leaf(position) {
      Some((node, cell)) => match cell.read().as_deref() {
        Some(block) => block.values[Self::local_index(node, position)],
        None => self.generator.default_value(position),
      },
      None => self.generator.default_value(position),
    }
  }

  /// Color for meshing, with the same out-of-world fallback as
  /// [`Self::sample_value`].
  #[inline]
  pub fn sample_color(&self, position: IVec3) -> Rgba8 {
    match self.find_leaf(position) {
      Some((node, cell)) => match cell.read().as_deref() {
        Some(block) => block.colors[Self::local_index(node, position)],
        None => self.generator.default_color(position),
      },
      None => self.generator.default_color(position),
    }
  }

  // ===========================================================================
  // Writes
  // ===========================================================================

  /// Run `edit` on the dense block owning `position`, materializing it first.
  fn edit_leaf(&self, position: IVec3, edit: impl FnOnce(&mut DenseBlock, usize)) -> Result<()> {
    let Some((node, cell)) = self.find_leaf(position) else {
      warn!(?position, "edit outside the world");
      return Err(TerrainError::OutsideWorld { position });
    };
    let mut guard = cell.write();
    let block = guard.get_or_insert_with(|| {
      Box::new(DenseBlock::materialize(node.cube.min(), &self.generator))
    });
    edit(&mut **block, Self::local_index(node, position));
    Ok(())
  }

  /// Set the density at `position`, clamped to ±127.
  pub fn set_value(&self, position: IVec3, value: i32) -> Result<()> {
    self.edit_leaf(position, |block, i| block.values[i] = density::clamp(value))
  }

  /// Set the color at `position`. The density is left alone.
  pub fn set_color(&self, position: IVec3, color: Rgba8) -> Result<()> {
    self.edit_leaf(position, |block, i| block.colors[i] = color)
  }

  /// Push the density toward solid by `strength`.
  pub fn add(&self, position: IVec3, strength: i32) -> Result<()> {
    self.edit_leaf(position, |block, i| {
      block.values[i] = density::clamp(block.values[i] as i32 - strength)
    })
  }

  /// Push the density toward air by `strength`.
  pub fn remove(&self, position: IVec3, strength: i32) -> Result<()> {
    self.edit_leaf(position, |block, i| {
      block.values[i] = density::clamp(block.values[i] as i32 + strength)
    })
  }

  // ===========================================================================
  // Dirty tracking and persistence
  // ===========================================================================

  fn leaves(&self) -> impl Iterator<Item = (&ValueNode, &LeafCell)> {
    self
      .nodes
      .iter()
      .filter_map(|node| node.as_leaf().map(|cell| (node, cell)))
  }

  /// True once the leaf owning `position` has been written.
  pub fn leaf_is_dirty(&self, position: IVec3) -> bool {
    self
      .find_leaf(position)
      .is_some_and(|(_, cell)| cell.is_dirty())
  }

  /// Number of leaves holding edits.
  pub fn dirty_leaf_count(&self) -> usize {
    self.leaves().filter(|(_, cell)| cell.is_dirty()).count()
  }

  /// Drop every dense block, returning all leaves to the default field.
  pub fn clear_dirty_leaves(&self) {
    for (_, cell) in self.leaves() {
      *cell.write() = None;
    }
  }

  /// Snapshot every dirty leaf.
  pub fn save(&self) -> Vec<SavedLeaf> {
    self
      .leaves()
      .filter_map(|(node, cell)| {
        cell.read().as_deref().map(|block| SavedLeaf {
          position: node.cube.center,
          values: block.values.to_vec(),
          colors: block.colors.to_vec(),
        })
      })
      .collect()
  }

  /// Restore saved leaves, matching them to leaves by center position.
  ///
  /// With `reset`, every leaf is cleaned first. Unknown positions are logged
  /// and skipped. Returns the leaves restored. Nothing is written if any
  /// entry has the wrong size.
  pub fn load(&self, data: &[SavedLeaf], reset: bool) -> Result<Vec<IVec3>> {
    for leaf in data {
      for actual in [leaf.values.len(), leaf.colors.len()] {
        if actual != LEAF_VOLUME {
          return Err(TerrainError::LeafSizeMismatch {
            position: leaf.position,
            expected: LEAF_VOLUME,
            actual,
          });
        }
      }
    }

    if reset {
      self.clear_dirty_leaves();
    }

    let mut restored = Vec::with_capacity(data.len());
    for leaf in data {
      let target = self
        .find_leaf(leaf.position)
        .filter(|(node, _)| node.cube.center == leaf.position);
      let Some((_, cell)) = target else {
        warn!(position = ?leaf.position, "saved leaf matches no leaf in this world");
        continue;
      };
      let values: Vec<Density> = leaf.values.iter().map(|&v| density::clamp(v as i32)).collect();
      *cell.write() = Some(Box::new(DenseBlock {
        values: values.into_boxed_slice(),
        colors: leaf.colors.clone().into_boxed_slice(),
      }));
      restored.push(leaf.position);
    }
    debug!(restored = restored.len(), "value octree loaded");
    Ok(restored)
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
