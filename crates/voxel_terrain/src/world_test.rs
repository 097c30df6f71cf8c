use super::*;
use crate::generator::{FlatGenerator, SphereGenerator};

fn flat_world(depth: u32) -> VoxelWorld<FlatGenerator> {
  VoxelWorld::new(WorldConfig::new().with_depth(depth), FlatGenerator::new(0.5))
    .expect("valid config")
}

// =========================================================================
// WorldId / config
// =========================================================================

#[test]
fn test_world_id_is_unique() {
  let id1 = WorldId::new();
  let id2 = WorldId::new();
  assert_ne!(id1, id2);
  assert_ne!(flat_world(1).id(), flat_world(1).id());
}

#[test]
fn test_config_validation() {
  assert!(WorldConfig::default().validate().is_ok());
  assert!(
    WorldConfig::new().with_depth(MAX_OCTREE_DEPTH + 1).validate().is_err(),
    "Depth beyond the value octree limit is rejected"
  );
  let bad_mesh = WorldConfig::new().with_mesh(MeshConfig::new().with_transition_width(1.5));
  assert!(
    VoxelWorld::new(bad_mesh, FlatGenerator::new(0.0)).is_err(),
    "Worlds refuse invalid configs"
  );
}

// =========================================================================
// LOD updates
// =========================================================================

#[test]
fn test_camera_update_meshes_every_chunk() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  assert_eq!(world.chunks().leaves().count(), 8, "Camera at the center splits the root");

  let delivered = world.flush(&mut store);
  assert_eq!(delivered, 8);
  assert!(world.is_idle());
  assert_eq!(store.meshes.len(), 8);
  for chunk in world.chunks().leaves() {
    let mesh = chunk.mesh().expect("every live chunk has a mesh");
    assert_eq!(mesh.key, chunk.key());
    assert!(!chunk.is_in_flight(), "Jobs are finished after a flush");
  }

  let top = &store.meshes[&ChunkKey::new(IVec3::new(0, 0, 0), 0)];
  assert!(!top.mesh.is_empty(), "The ground plane crosses the upper chunks");
  let below = &store.meshes[&ChunkKey::new(IVec3::new(0, -16, 0), 0)];
  assert!(below.mesh.is_empty(), "Below ground only halo cells see the surface");
}

#[test]
fn test_camera_leaving_merges_chunks() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  world.flush(&mut store);

  world.update_camera_position(DVec3::splat(1.0e6));
  world.flush(&mut store);
  let keys: Vec<ChunkKey> = store.meshes.keys().copied().collect();
  assert_eq!(
    keys,
    vec![ChunkKey::new(IVec3::splat(-16), 1)],
    "Unloaded chunks are removed from the sink"
  );
}

#[test]
fn test_jobs_for_unloaded_chunks_are_dropped() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  // Unload the eight fine chunks before their results are delivered.
  world.update_camera_position(DVec3::splat(1.0e6));
  world.flush(&mut store);
  assert_eq!(store.meshes.len(), 1, "Only the surviving chunk is delivered");
  assert!(store.meshes.keys().all(|k| k.depth == 1));
}

#[test]
fn test_neighbor_flags_follow_tree() {
  let config = WorldConfig::new()
    .with_depth(2)
    .with_chunk(ChunkOctreeConfig::new().with_lod_distance_factor(1.0));
  let generator = SphereGenerator::new(20.0);
  let mut world = VoxelWorld::new(config, generator).expect("valid config");
  world.update_camera_position(DVec3::new(-30.0, -30.0, -30.0));

  let depths: Vec<u32> = world.chunks().leaves().map(|c| c.key().depth).collect();
  assert!(depths.iter().any(|&d| d == 0), "Camera corner is finest");
  assert!(depths.iter().any(|&d| d > 0), "Far corner stays coarse");
  let mut any_finer = false;
  for chunk in world.chunks().leaves() {
    let expected = world.chunks().finer_neighbor_flags(chunk.key());
    assert_eq!(chunk.neighbor_flags(), expected, "Stored flags for {:?}", chunk.key());
    any_finer |= !expected.is_empty();
  }
  assert!(any_finer, "Mixed LODs give some chunk a finer neighbor");

  let mut store = MeshStore::default();
  world.flush(&mut store);
  assert_eq!(store.meshes.len(), world.chunks().leaves().count());
}

// =========================================================================
// Edits
// =========================================================================

#[test]
fn test_edit_queues_owner_and_boundary_readers() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  world.flush(&mut store);

  world.set_value(IVec3::new(5, 5, 5), -100).expect("inside world");
  assert_eq!(world.queued_count(), 1, "Interior voxel only touches its owner");
  world.flush(&mut store);

  world.set_value(IVec3::ZERO, -100).expect("inside world");
  assert_eq!(
    world.queued_count(),
    8,
    "The shared corner of all eight chunks re-meshes all of them"
  );
  world.flush(&mut store);
  assert!(world.is_idle());
}

#[test]
fn test_edit_changes_delivered_mesh() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  world.flush(&mut store);
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let before = Arc::clone(&store.meshes[&key]);

  world.add(IVec3::new(8, 2, 8), 100).expect("inside world");
  world.flush(&mut store);
  let after = &store.meshes[&key];
  assert!(
    after.mesh.triangle_count() > before.mesh.triangle_count(),
    "A solid voxel above ground adds geometry"
  );
  assert!(world.get_value(IVec3::new(8, 2, 8)) < 0);
}

#[test]
fn test_edit_outside_world_fails() {
  let mut world = flat_world(1);
  let result = world.set_value(IVec3::new(100, 0, 0), 10);
  assert!(
    matches!(result, Err(TerrainError::OutsideWorld { .. })),
    "Got {:?}",
    result
  );
  world.queue_update(IVec3::new(100, 0, 0));
  assert_eq!(world.queued_count(), 0, "Nothing to queue outside the world");
}

#[test]
fn test_busy_chunk_stays_queued() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  world.flush(&mut store);

  let chunk = Arc::clone(world.chunk_at(IVec3::new(5, 5, 5)).expect("chunk exists"));
  assert!(chunk.try_begin_job(), "No job is running after a flush");
  world.queue_update(IVec3::new(5, 5, 5));
  world.apply_queued_updates();
  assert_eq!(world.queued_count(), 1, "A chunk with a running job waits");

  chunk.finish_job();
  world.apply_queued_updates();
  assert_eq!(world.queued_count(), 0);
  world.flush(&mut store);
  assert!(world.is_idle());
}

#[test]
fn test_update_all_queues_every_chunk() {
  let mut world = flat_world(1);
  let mut store = MeshStore::default();
  world.update_camera_position(DVec3::ZERO);
  world.flush(&mut store);
  world.update_all();
  assert_eq!(world.queued_count(), 8);
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn test_save_load_restores_edits_and_requeues() {
  let mut source = flat_world(1);
  source.set_value(IVec3::new(3, 4, 5), -90).expect("inside world");
  source.set_color(IVec3::new(3, 4, 5), [1, 2, 3, 4]).expect("inside world");
  let saved = source.save();
  assert_eq!(saved.len(), 1, "One leaf was edited");

  let mut target = flat_world(1);
  let mut store = MeshStore::default();
  target.update_camera_position(DVec3::ZERO);
  target.flush(&mut store);

  target.load(&saved, false).expect("matching leaf sizes");
  assert_eq!(target.get_value(IVec3::new(3, 4, 5)), -90);
  assert_eq!(target.get_color(IVec3::new(3, 4, 5)), [1, 2, 3, 4]);
  assert!(target.queued_count() > 0, "Chunks over the loaded leaf re-mesh");
  target.flush(&mut store);

  target.load(&[], true).expect("empty load");
  let p = IVec3::new(3, 4, 5);
  assert_eq!(
    target.get_value(p),
    target.octree().generator().default_value(p),
    "Reset drops the loaded edit"
  );
  assert_eq!(target.queued_count(), 8, "Reset re-meshes everything");
}
