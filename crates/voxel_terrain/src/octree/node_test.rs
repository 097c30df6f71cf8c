use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::*;

/// Equal cubes must produce equal hashes (HashMap invariant).
#[test]
fn test_cube_hash_consistency() {
  let a = OctreeCube::new(IVec3::new(8, 8, 8), 0);
  let b = OctreeCube::new(IVec3::new(8, 8, 8), 0);
  let c = OctreeCube::new(IVec3::new(8, 8, 8), 1);

  let hash = |cube: &OctreeCube| {
    let mut hasher = DefaultHasher::new();
    cube.hash(&mut hasher);
    hasher.finish()
  };

  assert_eq!(a, b);
  assert_ne!(a, c, "Depth is part of identity");
  assert_eq!(hash(&a), hash(&b), "Equal cubes must have equal hashes");
}

#[test]
fn test_width_doubles_per_depth() {
  assert_eq!(OctreeCube::root(0).width(), 16);
  assert_eq!(OctreeCube::root(1).width(), 32);
  assert_eq!(OctreeCube::root(4).width(), 256);
}

#[test]
fn test_contains_is_half_open() {
  let root = OctreeCube::root(1);
  assert!(root.contains(IVec3::splat(-16)), "Min corner is inside");
  assert!(root.contains(IVec3::splat(15)));
  assert!(!root.contains(IVec3::new(16, 0, 0)), "Max corner is outside");
  assert!(!root.contains(IVec3::new(0, -17, 0)));
}

/// All 8 octants produce children whose octant index round-trips.
///
/// Octant bits: X (bit 0), Y (bit 1), Z (bit 2)
#[test]
fn test_child_octant_roundtrip() {
  let parent = OctreeCube::new(IVec3::new(64, -32, 0), 3);

  for octant in 0..8 {
    let child = parent
      .child(octant)
      .unwrap_or_else(|| panic!("Octant {} should return a child", octant));
    assert_eq!(child.depth, 2, "Octant {} depth mismatch", octant);
    assert_eq!(
      parent.octant(child.center),
      octant,
      "Child center should descend back into octant {}",
      octant
    );
    assert!(parent.contains(child.min()), "Octant {} min outside parent", octant);
    assert!(
      parent.contains(child.max() - IVec3::ONE),
      "Octant {} max outside parent",
      octant
    );
  }
}

/// Cannot subdivide at depth 0 (finest level).
#[test]
fn test_child_at_depth_0_returns_none() {
  let leaf = OctreeCube::new(IVec3::new(8, 8, 8), 0);
  for octant in 0..8 {
    assert!(
      leaf.child(octant).is_none(),
      "Depth 0 cube should not produce children for octant {}",
      octant
    );
  }
}

#[test]
fn test_octant_bit_layout() {
  let cube = OctreeCube::root(2);
  assert_eq!(cube.octant(IVec3::new(-1, -1, -1)), 0);
  assert_eq!(cube.octant(IVec3::new(0, -1, -1)), 1);
  assert_eq!(cube.octant(IVec3::new(-1, 0, -1)), 2);
  assert_eq!(cube.octant(IVec3::new(-1, -1, 0)), 4);
  assert_eq!(cube.octant(IVec3::new(5, 5, 5)), 7);
}
