use std::sync::Arc;

use super::*;
use crate::generator::{ConstantGenerator, FlatGenerator};

fn flat_octree(depth: u32) -> ValueOctree<FlatGenerator> {
  ValueOctree::new(depth, FlatGenerator::new(0.5)).expect("valid depth")
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_create_tree_splits_to_unit_leaves() {
  let octree = flat_octree(2);
  let leaves = octree.nodes.iter().filter(|n| n.as_leaf().is_some()).count();
  assert_eq!(leaves, 64, "Depth 2 should hold 8^2 leaves");
  assert_eq!(octree.nodes.len(), 1 + 8 + 64, "Root + 8 + 64 nodes");
  assert!(
    octree
      .nodes
      .iter()
      .all(|n| (n.as_leaf().is_some()) == (n.cube.depth == 0)),
    "Exactly the depth-0 nodes are leaves"
  );
  assert_eq!(octree.width(), 64);
}

#[test]
fn test_depth_is_bounded() {
  let result = ValueOctree::new(MAX_OCTREE_DEPTH + 1, ConstantGenerator::new(1));
  assert!(
    matches!(result, Err(TerrainError::InvalidConfig { field: "depth", .. })),
    "Depth above the limit should be rejected"
  );
}

#[test]
fn test_world_bounds() {
  let octree = flat_octree(1);
  assert!(octree.is_in_world(IVec3::splat(-16)));
  assert!(octree.is_in_world(IVec3::splat(15)));
  assert!(!octree.is_in_world(IVec3::new(16, 0, 0)));
}

// =========================================================================
// Reads and writes
// =========================================================================

#[test]
fn test_clean_leaf_reads_generator() {
  let octree = flat_octree(1);
  let below = IVec3::new(3, -4, 7);
  let above = IVec3::new(3, 4, 7);
  assert_eq!(
    octree.get_value(below),
    octree.generator().default_value(below)
  );
  assert!(octree.get_value(below) < 0, "Below the plane is solid");
  assert!(octree.get_value(above) > 0, "Above the plane is air");
  assert_eq!(octree.get_color(above), octree.generator().color);
}

#[test]
fn test_set_value_roundtrip_and_clamp() {
  let octree = flat_octree(1);
  let p = IVec3::new(-5, 2, 9);

  octree.set_value(p, -42).expect("in world");
  assert_eq!(octree.get_value(p), -42);

  octree.set_value(p, 500).expect("in world");
  assert_eq!(octree.get_value(p), 127, "Large values clamp to 127");

  octree.set_value(p, -128).expect("in world");
  assert_eq!(octree.get_value(p), -127, "-128 clamps to -127");
}

#[test]
fn test_set_value_leaves_other_cells_untouched() {
  let octree = flat_octree(1);
  let p = IVec3::new(4, 4, 4);
  octree.set_value(p, -100).expect("in world");

  // Every other cell of the same leaf still matches the generator.
  for z in 0..16 {
    for y in 0..16 {
      for x in 0..16 {
        let q = IVec3::new(x, y, z);
        if q == p {
          continue;
        }
        assert_eq!(
          octree.get_value(q),
          octree.generator().default_value(q),
          "Cell {:?} changed",
          q
        );
      }
    }
  }
}

#[test]
fn test_dirty_flag_set_by_first_write() {
  let octree = flat_octree(1);
  let p = IVec3::new(1, 1, 1);
  assert!(!octree.leaf_is_dirty(p), "Fresh leaf is clean");
  assert_eq!(octree.dirty_leaf_count(), 0);

  // Reads never materialize.
  let _ = octree.get_value(p);
  assert!(!octree.leaf_is_dirty(p));

  octree.set_color(p, [1, 2, 3, 4]).expect("in world");
  assert!(octree.leaf_is_dirty(p), "First write marks the leaf dirty");
  assert!(octree.leaf_is_dirty(IVec3::new(15, 0, 15)), "Same leaf");
  assert!(!octree.leaf_is_dirty(IVec3::new(-1, 0, 0)), "Neighbor leaf stays clean");
  assert_eq!(octree.get_color(p), [1, 2, 3, 4]);
  assert_eq!(octree.dirty_leaf_count(), 1);
}

#[test]
fn test_out_of_world_reads_return_default() {
  let octree = flat_octree(1);
  let outside = IVec3::new(100, -4, 0);
  assert_eq!(octree.get_value(outside), 0);
  assert_eq!(octree.get_color(outside), DEFAULT_COLOR);
  assert!(
    octree.sample_value(outside) < 0,
    "Meshing reads fall back to the default field"
  );
}

#[test]
fn test_out_of_world_write_errors() {
  let octree = flat_octree(1);
  let outside = IVec3::new(0, 0, -17);
  assert!(matches!(
    octree.set_value(outside, 3),
    Err(TerrainError::OutsideWorld { position }) if position == outside
  ));
  assert_eq!(octree.dirty_leaf_count(), 0);
}

#[test]
fn test_add_and_remove_move_density() {
  let octree = ValueOctree::new(1, ConstantGenerator::new(10)).expect("valid depth");
  let p = IVec3::new(2, 3, 4);

  octree.add(p, 25).expect("in world");
  assert_eq!(octree.get_value(p), -15, "Add moves toward solid");

  octree.remove(p, 40).expect("in world");
  assert_eq!(octree.get_value(p), 25, "Remove moves toward air");

  octree.remove(p, 1000).expect("in world");
  assert_eq!(octree.get_value(p), 127, "Edits clamp");
}

#[test]
fn test_concurrent_first_writes_keep_every_edit() {
  let octree = Arc::new(ValueOctree::new(1, ConstantGenerator::new(50)).expect("valid depth"));

  std::thread::scope(|scope| {
    for t in 0..8 {
      let octree = Arc::clone(&octree);
      scope.spawn(move || {
        for i in 0..16 {
          octree
            .set_value(IVec3::new(i, t, 0), -(t * 16 + i))
            .expect("in world");
        }
      });
    }
  });

  for t in 0..8 {
    for i in 0..16 {
      assert_eq!(
        octree.get_value(IVec3::new(i, t, 0)),
        -(t * 16 + i) as i8,
        "Edit at ({}, {}) lost",
        i,
        t
      );
    }
  }
  assert_eq!(octree.dirty_leaf_count(), 1);
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn test_save_only_dirty_leaves() {
  let octree = flat_octree(1);
  assert!(octree.save().is_empty());

  octree.set_value(IVec3::new(-3, 5, 5), 9).expect("in world");
  let saved = octree.save();
  assert_eq!(saved.len(), 1);
  assert_eq!(saved[0].position, IVec3::new(-8, 8, 8), "Saved by leaf center");
  assert_eq!(saved[0].values.len(), LEAF_VOLUME);
  assert_eq!(saved[0].colors.len(), LEAF_VOLUME);
}

#[test]
fn test_save_load_roundtrip() {
  let source = flat_octree(2);
  let edits = [
    (IVec3::new(-30, 2, 1), -77),
    (IVec3::new(12, -20, 31), 64),
    (IVec3::new(0, 0, 0), 127),
  ];
  for (p, v) in edits {
    source.set_value(p, v).expect("in world");
  }
  source.set_color(IVec3::new(12, -20, 31), [9, 8, 7, 6]).expect("in world");

  let target = flat_octree(2);
  let restored = target.load(&source.save(), false).expect("sizes match");
  assert_eq!(restored.len(), 3);
  for (p, v) in edits {
    assert_eq!(target.get_value(p), v as i8, "Value at {:?}", p);
    assert!(target.leaf_is_dirty(p));
  }
  assert_eq!(target.get_color(IVec3::new(12, -20, 31)), [9, 8, 7, 6]);
  assert_eq!(target.save(), source.save(), "Saves should match after load");
}

#[test]
fn test_load_clamps_and_resets() {
  let octree = flat_octree(1);
  octree.set_value(IVec3::new(-5, -5, -5), 3).expect("in world");

  let leaf = SavedLeaf {
    position: IVec3::new(8, 8, 8),
    values: vec![-128; LEAF_VOLUME],
    colors: vec![[0; 4]; LEAF_VOLUME],
  };
  octree.load(&[leaf], true).expect("sizes match");

  assert_eq!(octree.get_value(IVec3::new(1, 1, 1)), -127, "-128 clamps to -127");
  assert!(
    !octree.leaf_is_dirty(IVec3::new(-5, -5, -5)),
    "Reset cleans leaves absent from the save"
  );
  assert_eq!(octree.dirty_leaf_count(), 1);
}

#[test]
fn test_load_skips_unknown_positions() {
  let octree = flat_octree(1);
  let leaf = SavedLeaf {
    position: IVec3::new(9, 8, 8),
    values: vec![0; LEAF_VOLUME],
    colors: vec![[0; 4]; LEAF_VOLUME],
  };
  let restored = octree.load(&[leaf], false).expect("sizes match");
  assert!(restored.is_empty(), "Off-center positions match no leaf");
  assert_eq!(octree.dirty_leaf_count(), 0);
}

#[test]
fn test_load_rejects_wrong_size() {
  let octree = flat_octree(1);
  let good = SavedLeaf {
    position: IVec3::new(8, 8, 8),
    values: vec![0; LEAF_VOLUME],
    colors: vec![[0; 4]; LEAF_VOLUME],
  };
  let bad = SavedLeaf {
    position: IVec3::new(-8, 8, 8),
    values: vec![0; 10],
    colors: vec![[0; 4]; LEAF_VOLUME],
  };
  let result = octree.load(&[good, bad], false);
  assert!(matches!(
    result,
    Err(TerrainError::LeafSizeMismatch { actual: 10, .. })
  ));
  assert_eq!(octree.dirty_leaf_count(), 0, "Nothing is written on error");
}
