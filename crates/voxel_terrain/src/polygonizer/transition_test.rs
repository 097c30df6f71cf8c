use super::*;
use crate::polygonizer::test_utils::GridAccess;
use crate::sampling::FaceSpace;

const SIZE: i32 = 32;

/// Solid on and below y = 0.
fn ground(p: IVec3) -> Density {
  if p.y <= 0 {
    -10
  } else {
    10
  }
}

fn polygonize(face: Face, cells: &[(IVec3, u8)]) -> RawMesh {
  let mut access = GridAccess::with_space(1, FaceSpace::new(face, SIZE), ground);
  let mut mesh = RawMesh::new();
  let polygonizer = TransitionPolygonizer::new(face);
  for &(cell, validity) in cells {
    polygonizer.polygonize_cell(&mut access, &mut mesh, cell, validity);
  }
  mesh
}

#[test]
fn test_bottom_row_solid() {
  let mesh = polygonize(Face::ZMin, &[(IVec3::ZERO, 0)]);

  assert_eq!(mesh.transition.len(), 3, "Solid bottom row triangulates into 3");
  assert_eq!(mesh.vertices.len(), 5, "3 full-resolution + 2 low-resolution");

  let low: Vec<_> = mesh
    .vertices
    .iter()
    .filter(|v| v.flags.contains(VertexFlags::TRANSLATE))
    .collect();
  assert_eq!(low.len(), 2, "Only low-resolution vertices get translated");

  for v in &mesh.vertices {
    assert_eq!(v.position.z, 0.0, "Untranslated vertices lie on the face");
    assert!(
      (v.position.y - 0.5).abs() < 1e-6,
      "Crossing between y = 0 and y = 1, got {:?}",
      v.position
    );
    assert_eq!(v.color[1], 0, "Color comes from the solid sample");
  }
}

#[test]
fn test_uniform_cell_is_empty() {
  let mut access = GridAccess::with_space(1, FaceSpace::new(Face::YMax, SIZE), |_| 7);
  let mut mesh = RawMesh::new();
  let triangles =
    TransitionPolygonizer::new(Face::YMax).polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0);
  assert_eq!(triangles, 0);
  assert!(mesh.is_empty());
}

#[test]
fn test_neighbor_cells_share_vertices() {
  let mesh = polygonize(Face::ZMin, &[(IVec3::ZERO, 0), (IVec3::X, 0b01)]);
  assert_eq!(
    mesh.vertices.len(),
    8,
    "The shared full-resolution and low-resolution vertices are reused"
  );

  let alone = polygonize(Face::ZMin, &[(IVec3::ZERO, 0), (IVec3::X, 0)]);
  assert_eq!(alone.vertices.len(), 10, "Without validity nothing is reused");
  assert_eq!(
    alone.equivalences.len(),
    2,
    "Duplicates on the shared edge are tied together by seam keys"
  );
}

#[test]
fn test_max_face_maps_onto_chunk_boundary() {
  let mesh = polygonize(Face::XMax, &[(IVec3::new(3, 0, 0), 0)]);
  assert!(!mesh.vertices.is_empty());
  for v in &mesh.vertices {
    assert_eq!(v.position.x, SIZE as f32, "XMax cells sit on x = {}", SIZE);
    assert!(v.flags.near_faces().contains(Face::XMax));
  }
}

#[test]
fn test_cells_away_from_the_surface_are_empty() {
  // Row Y = 2 spans y in [4, 6] on ZMin: all air.
  let mesh = polygonize(Face::ZMin, &[(IVec3::new(0, 2, 0), 0)]);
  assert!(mesh.vertices.is_empty());
}
