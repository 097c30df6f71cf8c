//! Arena nodes of the value octree.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use glam::IVec3;

use crate::constants::{LEAF_SIZE, LEAF_VOLUME};
use crate::generator::FieldGenerator;
use crate::octree::OctreeCube;
use crate::types::{Density, Rgba8};

/// Index into the node arena.
pub type NodeId = u32;

/// Dense per-voxel storage of a dirty leaf.
#[derive(Clone, Debug)]
pub struct DenseBlock {
  pub values: Box<[Density]>,
  pub colors: Box<[Rgba8]>,
}

impl DenseBlock {
  /// Read every cell of the leaf starting at `min` from the generator.
  pub fn materialize<G: FieldGenerator>(min: IVec3, generator: &G) -> Self {
    let mut values = Vec::with_capacity(LEAF_VOLUME);
    let mut colors = Vec::with_capacity(LEAF_VOLUME);
    for z in 0..LEAF_SIZE {
      for y in 0..LEAF_SIZE {
        for x in 0..LEAF_SIZE {
          let p = min + IVec3::new(x, y, z);
          values.push(generator.default_value(p));
          colors.push(generator.default_color(p));
        }
      }
    }
    Self {
      values: values.into_boxed_slice(),
      colors: colors.into_boxed_slice(),
    }
  }
}

/// Leaf payload: `None` while clean, `Some` once written.
#[derive(Debug, Default)]
pub struct LeafCell {
  block: RwLock<Option<Box<DenseBlock>>>,
}

impl LeafCell {
  pub fn read(&self) -> RwLockReadGuard<'_, Option<Box<DenseBlock>>> {
    self.block.read().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, Option<Box<DenseBlock>>> {
    self.block.write().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn is_dirty(&self) -> bool {
    self.read().is_some()
  }
}

/// Exactly one of {leaf, split} holds for every node.
#[derive(Debug)]
pub enum NodeKind {
  Leaf(LeafCell),
  Split([NodeId; 8]),
}

#[derive(Debug)]
pub struct ValueNode {
  pub cube: OctreeCube,
  pub kind: NodeKind,
}

impl ValueNode {
  pub fn leaf(cube: OctreeCube) -> Self {
    Self {
      cube,
      kind: NodeKind::Leaf(LeafCell::default()),
    }
  }

  pub fn as_leaf(&self) -> Option<&LeafCell> {
    match &self.kind {
      NodeKind::Leaf(cell) => Some(cell),
      NodeKind::Split(_) => None,
    }
  }
}
