//! Test utilities for polygonizer tests.
//!
//! `GridAccess` evaluates an analytic field in chunk space and keeps its
//! vertex cache in a hash map, so single cells can be polygonized without
//! a value octree or sampling window.

use std::collections::HashMap;

use glam::IVec3;

use crate::sampling::{CellSpace, RegularSpace, VoxelAccess};
use crate::types::{Density, Rgba8};

pub struct GridAccess<F, S = RegularSpace> {
  field: F,
  space: S,
  depth: u32,
  cache: HashMap<(IVec3, usize), u32>,
}

impl<F: Fn(IVec3) -> Density> GridAccess<F> {
  pub fn new(depth: u32, field: F) -> Self {
    Self::with_space(depth, RegularSpace, field)
  }
}

impl<F: Fn(IVec3) -> Density, S: CellSpace> GridAccess<F, S> {
  pub fn with_space(depth: u32, space: S, field: F) -> Self {
    Self {
      field,
      space,
      depth,
      cache: HashMap::new(),
    }
  }
}

impl<F: Fn(IVec3) -> Density, S: CellSpace> VoxelAccess for GridAccess<F, S> {
  fn to_chunk(&self, local: IVec3) -> IVec3 {
    self.space.to_chunk(local)
  }

  fn value(&self, local: IVec3) -> Density {
    (self.field)(self.space.to_chunk(local))
  }

  /// Encodes the chunk position, so tests can tell which sample a color
  /// came from.
  fn color(&self, local: IVec3) -> Rgba8 {
    let p = self.space.to_chunk(local);
    [p.x as u8, p.y as u8, p.z as u8, 255]
  }

  fn load_vertex(&self, cell: IVec3, slot: usize) -> Option<u32> {
    self.cache.get(&(cell, slot)).copied()
  }

  fn save_vertex(&mut self, cell: IVec3, slot: usize, index: u32) {
    self.cache.insert((cell, slot), index);
  }

  fn depth(&self) -> u32 {
    self.depth
  }
}
