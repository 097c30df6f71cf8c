use super::*;
use crate::generator::{ConstantGenerator, FlatGenerator, SphereGenerator};
use crate::types::FaceFlags;

fn octree<G: FieldGenerator>(generator: G) -> ValueOctree<G> {
  ValueOctree::new(2, generator).expect("valid depth")
}

#[test]
fn test_window_matches_octree() {
  let octree = octree(SphereGenerator::new(20.0));
  let key = ChunkKey::new(IVec3::new(-32, -32, -32), 1);
  let cache = SamplingCache::new(&octree, key, FaceFlags::NONE);

  for local in [
    IVec3::ZERO,
    IVec3::new(-2, 0, 4),
    IVec3::new(32, 32, 32),
    IVec3::new(30, -2, 16),
  ] {
    assert_eq!(
      cache.value(local),
      octree.sample_value(key.origin + local),
      "Window sample at {:?}",
      local
    );
  }
}

#[test]
fn test_off_lattice_reads_fall_through() {
  let octree = octree(SphereGenerator::new(20.0));
  let key = ChunkKey::new(IVec3::new(-32, -32, -32), 1);
  let cache = SamplingCache::new(&octree, key, FaceFlags::NONE);

  // Half-step midpoints and the +17 boundary are not in the window.
  for local in [IVec3::new(1, 0, 0), IVec3::new(15, 17, 3), IVec3::splat(34)] {
    assert_eq!(
      cache.value(local),
      octree.sample_value(key.origin + local),
      "Octree read at {:?}",
      local
    );
  }
}

#[test]
fn test_edits_show_up_in_new_snapshots() {
  let octree = octree(ConstantGenerator::new(20));
  octree.set_value(IVec3::new(3, 4, 5), -50).expect("inside world");
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let cache = SamplingCache::new(&octree, key, FaceFlags::NONE);
  assert_eq!(cache.value(IVec3::new(3, 4, 5)), -50);
  assert!(!cache.is_homogeneous(), "One solid sample breaks homogeneity");
}

#[test]
fn test_homogeneity() {
  let air = octree(ConstantGenerator::new(5));
  let cache = SamplingCache::new(&air, ChunkKey::new(IVec3::ZERO, 0), FaceFlags::NONE);
  assert!(cache.is_homogeneous(), "Constant field is homogeneous");

  let ground = octree(FlatGenerator::new(0.5));
  let cache = SamplingCache::new(&ground, ChunkKey::new(IVec3::ZERO, 0), FaceFlags::NONE);
  assert!(!cache.is_homogeneous(), "Window straddling y = 0.5 is mixed");

  let cache = SamplingCache::new(
    &ground,
    ChunkKey::new(IVec3::new(0, 16, 0), 0),
    FaceFlags::NONE,
  );
  assert!(cache.is_homogeneous(), "Chunk floating above the ground is all air");
}

#[test]
fn test_regular_slices_rotate() {
  let mut caches = VertexCaches::new();
  caches.begin_slice(-1);
  caches.regular_mut(IVec3::new(3, 4, -1))[2] = 7;
  caches.begin_slice(0);
  assert_eq!(caches.regular(IVec3::new(3, 4, -1))[2], 7, "Previous slice still visible");
  assert_eq!(caches.regular(IVec3::new(3, 4, 0))[2], NO_VERTEX, "New slice starts empty");

  caches.regular_mut(IVec3::new(3, 4, 0))[1] = 9;
  caches.begin_slice(1);
  assert_eq!(caches.regular(IVec3::new(3, 4, 0))[1], 9);
  assert_eq!(
    caches.regular(IVec3::new(3, 4, 1))[2],
    NO_VERTEX,
    "Recycled slice must be cleared"
  );
}

#[test]
fn test_face_caches_are_independent() {
  let mut caches = VertexCaches::new();
  caches.face_mut(Face::XMin, IVec3::new(2, 3, 0))[5] = 11;
  assert_eq!(caches.face(Face::XMin, IVec3::new(2, 3, 0))[5], 11);
  assert_eq!(caches.face(Face::ZMax, IVec3::new(2, 3, 0))[5], NO_VERTEX);
}
