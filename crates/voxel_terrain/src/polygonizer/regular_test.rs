use super::*;
use crate::polygonizer::test_utils::GridAccess;
use crate::types::Face;

/// Air on the z = 0 layer, solid on z = 1.
fn slab(p: IVec3) -> Density {
  if p.z <= 0 {
    10
  } else {
    -10
  }
}

#[test]
fn test_single_cell_slab() {
  let mut access = GridAccess::new(0, slab);
  let mut mesh = RawMesh::new();
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);

  let triangles = polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);

  assert_eq!(triangles, 2, "Case 0xF0 is a quad");
  assert_eq!(mesh.vertices.len(), 4, "One vertex per crossing edge");
  for v in &mesh.vertices {
    assert!(
      (v.position.z - 0.5).abs() < 1e-6,
      "Vertex {:?} should sit halfway up",
      v.position
    );
    assert!(v.flags.contains(VertexFlags::TRANSLATE));
    assert_eq!(v.color[2], 1, "Color comes from the solid corner");
  }
  for tri in &mesh.regular {
    let [a, b, c] = tri.indices.map(|i| mesh.vertices[i as usize].position);
    let normal = (b - a).cross(c - a);
    assert!(normal.z < 0.0, "Triangle should face the air below, got {:?}", normal);
  }
}

#[test]
fn test_uniform_cell_is_empty() {
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);
  for value in [-20, 0, 20] {
    let mut access = GridAccess::new(0, move |_| value);
    let mut mesh = RawMesh::new();
    let triangles = polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);
    assert_eq!(triangles, 0, "Uniform {} produces nothing", value);
    assert!(mesh.vertices.is_empty());
  }
}

#[test]
fn test_neighbor_cells_share_vertices() {
  let mut access = GridAccess::new(0, slab);
  let mut mesh = RawMesh::new();
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);

  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);
  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::X, 0b001, true);

  // Only the x = 1, y = 1 edge is owned by cell 0; the x = 1, y = 0 edge
  // belongs to a cell outside the processed block.
  assert_eq!(mesh.vertices.len(), 7, "The second quad reuses one vertex");
}

#[test]
fn test_missing_validity_duplicates_vertices() {
  let mut access = GridAccess::new(0, slab);
  let mut mesh = RawMesh::new();
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);

  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);
  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::X, 0, true);

  assert_eq!(mesh.vertices.len(), 8, "Without validity nothing is reused");
}

#[test]
fn test_coarse_cell_bisects_edges() {
  // Surface at z = 1.5, inside a depth-1 cell spanning z in [0, 2].
  let field = |p: IVec3| if p.z <= 1 { 10 } else { -10 };
  let mut access = GridAccess::new(1, field);
  let mut mesh = RawMesh::new();
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);

  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);

  assert_eq!(mesh.vertices.len(), 4);
  for v in &mesh.vertices {
    assert!(
      (v.position.z - 1.5).abs() < 1e-6,
      "Bisection should find the crossing between z = 1 and z = 2, got {:?}",
      v.position
    );
  }
}

#[test]
fn test_zero_corner_becomes_vertex() {
  // Corner 0 sits exactly on the surface.
  let field = |p: IVec3| {
    if p == IVec3::ZERO {
      0
    } else if p.z == 0 {
      10
    } else {
      -10
    }
  };
  let mut access = GridAccess::new(0, field);
  let mut mesh = RawMesh::new();
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);

  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);

  let at_corner = mesh
    .vertices
    .iter()
    .filter(|v| v.position == Vec3::ZERO)
    .count();
  assert_eq!(at_corner, 1, "Zero corner yields exactly one vertex on the corner");
}

#[test]
fn test_finer_face_registers_seams() {
  // Surface crossing the x = 0 face plane.
  let field = |p: IVec3| if p.y <= 0 { -10 } else { 10 };
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE.with(Face::XMin));

  let mut access = GridAccess::new(0, field);
  let mut first = RawMesh::new();
  polygonizer.polygonize_cell(&mut access, &mut first, IVec3::ZERO, 0, true);
  // Same cell again without reuse: the on-plane vertices must be tied back
  // to the first ones.
  let mut access = GridAccess::new(0, field);
  polygonizer.polygonize_cell(&mut access, &mut first, IVec3::ZERO, 0, true);

  assert_eq!(
    first.equivalences.len(),
    2,
    "Two crossing edges lie in the x = 0 plane"
  );
}

#[test]
fn test_near_flags() {
  let polygonizer = RegularPolygonizer::new(FaceFlags::NONE);
  let mut access = GridAccess::new(0, slab);
  let mut mesh = RawMesh::new();
  polygonizer.polygonize_cell(&mut access, &mut mesh, IVec3::ZERO, 0, true);

  for v in &mesh.vertices {
    let near = v.flags.near_faces();
    assert!(near.contains(Face::ZMin), "z = 0.5 is within one cell of ZMin");
    assert!(!near.contains(Face::ZMax));
  }
}
