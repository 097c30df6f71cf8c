use super::*;
use crate::polygonizer::test_utils::GridAccess;

#[test]
fn test_vertex_flags_near_faces() {
  let flags = VertexFlags::near(Face::XMin) | VertexFlags::near(Face::ZMax) | VertexFlags::TRANSLATE;
  assert!(flags.contains(VertexFlags::TRANSLATE));
  assert!(flags.contains(VertexFlags::near(Face::XMin)));
  assert!(!flags.contains(VertexFlags::near(Face::YMin)));
  assert_eq!(
    flags.near_faces(),
    FaceFlags::NONE.with(Face::XMin).with(Face::ZMax),
    "TRANSLATE is not a face"
  );
}

#[test]
fn test_seam_key_ignores_endpoint_order() {
  let a = IVec3::new(0, 4, 2);
  let b = IVec3::new(0, 2, 2);
  assert_eq!(SeamKey::edge(SeamLayer::Low, a, b), SeamKey::edge(SeamLayer::Low, b, a));
  assert_ne!(
    SeamKey::edge(SeamLayer::Low, a, b),
    SeamKey::edge(SeamLayer::Fine, a, b),
    "Layers never share a key"
  );
  assert_ne!(SeamKey::point(SeamLayer::Fine, a), SeamKey::edge(SeamLayer::Fine, a, b));
}

#[test]
fn test_register_seam_anchors_first_vertex() {
  let mut mesh = RawMesh::new();
  let key = SeamKey::edge(SeamLayer::Fine, IVec3::ZERO, IVec3::X);
  mesh.register_seam(key, 3);
  mesh.register_seam(key, 7);
  mesh.register_seam(key, 3);
  mesh.register_seam(key, 9);
  assert_eq!(
    mesh.equivalences,
    vec![(3, 7), (3, 9)],
    "Duplicates pair with the anchor, re-registering the anchor is a no-op"
  );
}

#[test]
fn test_edge_crossing_interpolates() {
  let access = GridAccess::new(0, |p: IVec3| (20 * p.x - 5) as Density);
  let q = edge_crossing(&access, IVec3::ZERO, IVec3::X);
  assert!((q - Vec3::new(0.25, 0.0, 0.0)).length() < 1e-6, "Got {:?}", q);
  let reversed = edge_crossing(&access, IVec3::X, IVec3::ZERO);
  assert_eq!(q, reversed, "Endpoint order must not change the result");
}

#[test]
fn test_edge_crossing_bisects_long_edges() {
  // Zero at x = 2.5. A straight lerp between x = 0 and x = 4 would give 1.67.
  let access = GridAccess::new(2, |p: IVec3| (10 * p.x - 25) as Density);
  let q = edge_crossing(&access, IVec3::ZERO, IVec3::new(4, 0, 0));
  assert!((q.x - 2.5).abs() < 1e-6, "Got {:?}", q);
}

#[test]
fn test_near_flags() {
  let flags = near_flags(Vec3::new(0.5, 8.0, 15.5), 1.0, 16.0);
  assert_eq!(flags.near_faces(), FaceFlags::NONE.with(Face::XMin).with(Face::ZMax));
  assert_eq!(near_flags(Vec3::splat(8.0), 1.0, 16.0), VertexFlags::NONE);
  assert_eq!(
    near_flags(Vec3::new(3.0, 8.0, 8.0), 4.0, 64.0).near_faces(),
    FaceFlags::NONE.with(Face::XMin),
    "The band is one step wide"
  );
}

#[test]
fn test_on_face_plane_needs_both_endpoints() {
  let faces = FaceFlags::NONE.with(Face::XMin).with(Face::YMax);
  assert!(on_face_plane(IVec3::new(0, 3, 4), IVec3::new(0, 3, 5), faces, 16));
  assert!(on_face_plane(IVec3::new(2, 16, 4), IVec3::new(3, 16, 4), faces, 16));
  assert!(
    !on_face_plane(IVec3::new(0, 3, 4), IVec3::new(1, 3, 4), faces, 16),
    "An edge leaving the plane is not on it"
  );
  assert!(
    !on_face_plane(IVec3::new(3, 0, 4), IVec3::new(3, 0, 5), faces, 16),
    "YMin does not border a finer chunk"
  );
}
