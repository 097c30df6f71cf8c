//! OctreeCube - immutable value type for the region covered by a node.
//!
//! Both the value octree and the chunk octree describe nodes by center and
//! depth. Depth 0 = finest (16 voxels wide), each level up doubles the width.

use glam::IVec3;

use crate::constants::LEAF_SIZE;

/// Axis-aligned cube covered by an octree node.
///
/// Covers `[center - width/2, center + width/2)` on every axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OctreeCube {
  /// Center in global voxel coordinates.
  pub center: IVec3,
  /// Level of detail (0 = finest, higher = coarser)
  pub depth: u32,
}

impl OctreeCube {
  /// Create a cube at the given center and depth.
  pub fn new(center: IVec3, depth: u32) -> Self {
    Self { center, depth }
  }

  /// Root cube of a world of the given depth, centered on the origin.
  pub fn root(depth: u32) -> Self {
    Self::new(IVec3::ZERO, depth)
  }

  /// Edge length in voxels: `16 << depth`.
  #[inline]
  pub const fn width(&self) -> i32 {
    LEAF_SIZE << self.depth
  }

  /// Lowest corner (inclusive).
  #[inline]
  pub fn min(&self) -> IVec3 {
    self.center - IVec3::splat(self.width() / 2)
  }

  /// Highest corner (exclusive).
  #[inline]
  pub fn max(&self) -> IVec3 {
    self.center + IVec3::splat(self.width() / 2)
  }

  /// True if the position lies inside the half-open cube.
  #[inline]
  pub fn contains(&self, position: IVec3) -> bool {
    position.cmpge(self.min()).all() && position.cmplt(self.max()).all()
  }

  /// Octant containing `position`.
  ///
  /// - bit 0: x >= center.x
  /// - bit 1: y >= center.y
  /// - bit 2: z >= center.z
  #[inline]
  pub fn octant(&self, position: IVec3) -> usize {
    (position.x >= self.center.x) as usize
      | ((position.y >= self.center.y) as usize) << 1
      | ((position.z >= self.center.z) as usize) << 2
  }

  /// Child cube for an octant, using the same bit layout as [`Self::octant`].
  ///
  /// Returns None at depth 0 (cannot subdivide further).
  pub fn child(&self, octant: usize) -> Option<Self> {
    if self.depth == 0 {
      return None;
    }
    let quarter = self.width() / 4;
    let sign = |bit: usize| if (octant >> bit) & 1 == 1 { quarter } else { -quarter };
    Some(Self {
      center: self.center + IVec3::new(sign(0), sign(1), sign(2)),
      depth: self.depth - 1,
    })
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
