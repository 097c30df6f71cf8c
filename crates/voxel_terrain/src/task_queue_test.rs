use glam::{DVec3, IVec3};

use super::*;
use crate::generator::SphereGenerator;

fn sphere_octree() -> Arc<ValueOctree<SphereGenerator>> {
  let generator = SphereGenerator::new(10.0).with_center(DVec3::splat(8.0));
  Arc::new(ValueOctree::new(1, generator).expect("valid depth"))
}

fn request(
  chunk: &Arc<Chunk>,
  octree: &Arc<ValueOctree<SphereGenerator>>,
) -> MeshRequest<SphereGenerator> {
  MeshRequest {
    chunk: Arc::downgrade(chunk),
    key: chunk.key(),
    finer: FaceFlags::NONE,
    octree: Arc::clone(octree),
    config: MeshConfig::default(),
  }
}

#[test]
fn test_single_request() {
  let mut stage = MeshingStage::new();
  let octree = sphere_octree();
  let chunk = Arc::new(Chunk::new(ChunkKey::new(IVec3::ZERO, 0)));

  stage.enqueue(request(&chunk, &octree));
  assert_eq!(stage.in_flight_count(), 1);
  assert!(!stage.is_idle());

  let completions = stage.wait_completions();
  assert_eq!(completions.len(), 1);
  assert!(stage.is_idle());
  assert_eq!(completions[0].key, chunk.key());
  let mesh = completions[0].mesh.as_ref().expect("chunk was alive");
  assert!(!mesh.mesh.vertices.is_empty(), "Sphere crosses the chunk");
}

#[test]
fn test_multiple_requests() {
  let mut stage = MeshingStage::new();
  let octree = sphere_octree();
  let chunks: Vec<Arc<Chunk>> = [IVec3::ZERO, IVec3::new(-16, 0, 0), IVec3::new(0, -16, 0)]
    .into_iter()
    .map(|origin| Arc::new(Chunk::new(ChunkKey::new(origin, 0))))
    .collect();

  for chunk in &chunks {
    stage.enqueue(request(chunk, &octree));
  }
  assert_eq!(stage.in_flight_count(), 3);

  let completions = stage.wait_completions();
  assert_eq!(completions.len(), 3);
  let mut keys: Vec<IVec3> = completions.iter().map(|c| c.key.origin).collect();
  keys.sort_by_key(|k| k.to_array());
  let mut expected: Vec<IVec3> = chunks.iter().map(|c| c.key().origin).collect();
  expected.sort_by_key(|k| k.to_array());
  assert_eq!(keys, expected, "Each chunk completes exactly once");
}

#[test]
fn test_unloaded_chunk_is_skipped() {
  let mut stage = MeshingStage::new();
  let octree = sphere_octree();
  let chunk = Arc::new(Chunk::new(ChunkKey::new(IVec3::ZERO, 0)));
  let req = request(&chunk, &octree);
  drop(chunk);

  stage.enqueue(req);
  let completions = stage.wait_completions();
  assert_eq!(completions.len(), 1);
  assert!(completions[0].mesh.is_none(), "No mesh for a dead chunk");
  assert!(completions[0].chunk.upgrade().is_none());
}

#[test]
fn test_empty_drain() {
  let mut stage = MeshingStage::new();
  assert!(stage.is_idle());
  assert!(stage.drain_completions().is_empty());
  assert!(stage.wait_completions().is_empty(), "Nothing to wait for");
  assert!(stage.is_idle());
}
