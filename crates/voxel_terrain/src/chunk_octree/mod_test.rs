use std::collections::HashSet;

use super::*;

fn built(depth: u32, config: ChunkOctreeConfig, camera: DVec3) -> (ChunkOctree, TreeUpdate) {
  let mut octree = ChunkOctree::new(depth, config);
  let update = octree.create_tree(camera);
  (octree, update)
}

/// Live chunks must tile the world exactly once.
fn assert_tiles_world(octree: &ChunkOctree) {
  let width = octree.root().width() as i64;
  let volume: i64 = octree
    .leaves()
    .map(|c| (c.key().size() as i64).pow(3))
    .sum();
  assert_eq!(volume, width.pow(3), "Chunks should cover the world exactly");

  let half = octree.root().width() / 2;
  for z in (-half..half).step_by(8) {
    for y in (-half..half).step_by(8) {
      for x in (-half..half).step_by(8) {
        let p = IVec3::new(x, y, z);
        let chunk = octree.get_chunk(p).expect("every in-world point has a chunk");
        assert!(
          chunk.key().cube().contains(p),
          "Chunk {:?} does not contain {:?}",
          chunk.key(),
          p
        );
      }
    }
  }
}

#[test]
fn test_far_camera_keeps_single_root_chunk() {
  let (octree, update) = built(3, ChunkOctreeConfig::default(), DVec3::splat(1.0e6));
  assert_eq!(update.spawned.len(), 1);
  assert!(update.unloaded.is_empty());
  let keys: Vec<_> = octree.leaves().map(|c| c.key()).collect();
  assert_eq!(keys, vec![ChunkKey::new(IVec3::splat(-64), 3)]);
}

#[test]
fn test_camera_at_center_splits_to_finest() {
  let (octree, update) = built(2, ChunkOctreeConfig::default(), DVec3::ZERO);
  assert_eq!(update.spawned.len(), 64);
  assert!(octree.leaves().all(|c| c.key().depth == 0));
  assert_tiles_world(&octree);
}

#[test]
fn test_mixed_lods_tile_world_and_obey_rule() {
  let config = ChunkOctreeConfig::new().with_lod_distance_factor(1.0);
  for camera in [
    DVec3::new(-60.0, -60.0, -60.0),
    DVec3::new(10.0, -3.0, 40.0),
    DVec3::new(63.0, 0.0, -20.0),
  ] {
    let (octree, _) = built(3, config.clone(), camera);
    assert_tiles_world(&octree);
    for chunk in octree.leaves() {
      let cube = chunk.key().cube();
      assert!(
        config.is_leaf(&cube, camera),
        "Chunk {:?} should have been split for camera {:?}",
        chunk.key(),
        camera
      );
    }
    let depths: HashSet<u32> = octree.leaves().map(|c| c.key().depth).collect();
    assert!(depths.len() > 1, "Camera {:?} should produce mixed depths", camera);
  }
}

#[test]
fn test_recreate_keeps_unchanged_chunks() {
  let config = ChunkOctreeConfig::new().with_lod_distance_factor(1.0);
  let camera = DVec3::new(-60.0, -60.0, -60.0);
  let (mut octree, first) = built(3, config, camera);
  let before: Vec<Arc<Chunk>> = octree.leaves().cloned().collect();
  assert_eq!(first.spawned.len(), before.len());

  let update = octree.create_tree(camera);
  assert!(update.spawned.is_empty(), "Same camera spawns nothing");
  assert!(update.unloaded.is_empty(), "Same camera unloads nothing");
  for chunk in &before {
    let current = octree
      .get_chunk(chunk.key().origin)
      .expect("chunk still present");
    assert!(Arc::ptr_eq(chunk, current), "Chunk {:?} was recreated", chunk.key());
  }
}

#[test]
fn test_camera_move_spawns_and_unloads() {
  let config = ChunkOctreeConfig::new().with_lod_distance_factor(1.0);
  let (mut octree, _) = built(3, config, DVec3::splat(-60.0));
  let before: HashSet<ChunkKey> = octree.leaves().map(|c| c.key()).collect();

  let update = octree.create_tree(DVec3::splat(60.0));
  let after: HashSet<ChunkKey> = octree.leaves().map(|c| c.key()).collect();

  let unloaded: HashSet<ChunkKey> = update.unloaded.iter().copied().collect();
  let spawned: HashSet<ChunkKey> = update.spawned.iter().map(|c| c.key()).collect();
  assert_eq!(unloaded, &before - &after, "Unloaded = old minus new");
  assert_eq!(spawned, &after - &before, "Spawned = new minus old");
  assert_tiles_world(&octree);
}

#[test]
fn test_free_list_reuses_nodes() {
  let config = ChunkOctreeConfig::new().with_lod_distance_factor(1.0);
  let (mut octree, _) = built(3, config, DVec3::splat(-60.0));
  // One full round trip sizes the arena; after that, released nodes cover
  // every split.
  octree.create_tree(DVec3::splat(60.0));
  octree.create_tree(DVec3::splat(-60.0));
  let high_water = octree.nodes.len();
  for _ in 0..4 {
    octree.create_tree(DVec3::splat(-60.0));
    octree.create_tree(DVec3::splat(60.0));
  }
  assert_eq!(octree.nodes.len(), high_water, "Arena should stop growing");
}

#[test]
fn test_get_chunk_outside_world_or_unbuilt() {
  let octree = ChunkOctree::new(2, ChunkOctreeConfig::default());
  assert!(octree.get_chunk(IVec3::ZERO).is_none(), "Nothing before the first build");

  let (octree, _) = built(2, ChunkOctreeConfig::default(), DVec3::ZERO);
  assert!(octree.get_chunk(IVec3::new(0, 32, 0)).is_none());
  assert!(octree.get_chunk(IVec3::new(0, 31, 0)).is_some());
}

/// Depth 2 world with factor 1: the camera near -X refines only the
/// (-,-,-) octant, so the depth-1 chunk at +X sees finer chunks on XMin.
#[test]
fn test_finer_neighbor_flags() {
  let config = ChunkOctreeConfig::new().with_lod_distance_factor(1.0);
  let (octree, _) = built(2, config, DVec3::new(-40.0, -16.0, -16.0));

  let coarse = ChunkKey::new(IVec3::new(0, -32, -32), 1);
  let found = octree.get_chunk(IVec3::new(5, -20, -20)).expect("chunk").key();
  assert_eq!(found, coarse);
  assert_eq!(
    octree.finer_neighbor_flags(coarse),
    FaceFlags::NONE.with(Face::XMin),
    "Only the -X neighbor is finer"
  );

  let fine = ChunkKey::new(IVec3::new(-16, -32, -32), 0);
  assert_eq!(octree.get_chunk(IVec3::new(-10, -30, -30)).map(|c| c.key()), Some(fine));
  assert_eq!(
    octree.finer_neighbor_flags(fine),
    FaceFlags::NONE,
    "A depth-0 chunk never has finer neighbors"
  );
}

#[test]
fn test_chunks_overlapping() {
  let (octree, _) = built(2, ChunkOctreeConfig::default(), DVec3::ZERO);
  let hits = octree.chunks_overlapping(IVec3::new(-1, 0, 0), IVec3::new(1, 1, 1));
  assert_eq!(hits.len(), 2, "Box straddles the x = 0 boundary");
}
