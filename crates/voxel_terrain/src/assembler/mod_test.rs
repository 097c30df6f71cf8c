use std::collections::{BTreeSet, HashMap, HashSet};

use glam::DVec3;

use super::*;
use crate::generator::{ConstantGenerator, FlatGenerator, SphereGenerator};
use crate::polygonizer::RawVertex;
use crate::types::{Density, Face, Rgba8};

fn octree<G: FieldGenerator>(generator: G) -> ValueOctree<G> {
  ValueOctree::new(2, generator).expect("valid depth")
}

fn world_positions(chunk: &ChunkMesh) -> Vec<Vec3> {
  let origin = chunk.origin().as_vec3();
  chunk
    .mesh
    .vertices
    .iter()
    .map(|v| Vec3::from_array(v.position) + origin)
    .collect()
}

fn triangle_normals(mesh: &MeshOutput) -> Vec<Vec3> {
  mesh
    .indices
    .chunks_exact(3)
    .map(|tri| {
      let [a, b, c] =
        [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
      face_normal(a, b, c)
    })
    .collect()
}

fn assert_well_formed(mesh: &MeshOutput) {
  assert_eq!(mesh.indices.len() % 3, 0);
  let mut used = vec![false; mesh.vertices.len()];
  for tri in mesh.indices.chunks_exact(3) {
    assert!(
      tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
      "Degenerate triangle {:?}",
      tri
    );
    for &i in tri {
      assert!((i as usize) < mesh.vertices.len(), "Index {} out of range", i);
      used[i as usize] = true;
    }
  }
  assert!(used.iter().all(|&u| u), "Every emitted vertex is referenced");
  for v in &mesh.vertices {
    let n = Vec3::from_array(v.normal);
    let t = Vec3::from_array(v.tangent);
    assert!((n.length() - 1.0).abs() < 1e-4, "Normal {:?} is not unit", n);
    assert!((t.length() - 1.0).abs() < 1e-4, "Tangent {:?} is not unit", t);
    assert!(n.dot(t).abs() < 1e-4, "Tangent {:?} not orthogonal to {:?}", t, n);
  }
}

// =========================================================================
// Single chunks
// =========================================================================

#[test]
fn test_uniform_field_is_empty() {
  let octree = octree(ConstantGenerator::new(40));
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let chunk = mesh_chunk(&octree, key, FaceFlags::NONE, &MeshConfig::default());
  assert!(chunk.mesh.is_empty());
  assert!(chunk.mesh.indices.is_empty());

  let key = ChunkKey::new(IVec3::ZERO, 1);
  let chunk = mesh_chunk(&octree, key, FaceFlags::ALL, &MeshConfig::default());
  assert!(chunk.mesh.is_empty(), "Uniform transition cells add nothing either");
}

#[test]
fn test_flat_ground_chunk() {
  let octree = octree(FlatGenerator::new(0.5));
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let chunk = mesh_chunk(&octree, key, FaceFlags::NONE, &MeshConfig::default());
  let mesh = &chunk.mesh;

  assert_eq!(mesh.vertices.len(), 17 * 17, "One vertex per vertical lattice edge");
  assert_eq!(mesh.triangle_count(), 16 * 16 * 2, "One quad per surface cell");
  assert_well_formed(mesh);

  for v in &mesh.vertices {
    assert!((v.position[1] - 0.5).abs() < 1e-6, "Vertex {:?} off the plane", v.position);
    assert!(v.normal[1] > 0.999, "Normal {:?} should point up", v.normal);
  }
  for normal in triangle_normals(mesh) {
    assert!(normal.y > 0.0, "Triangle winding faces the air, got {:?}", normal);
  }
  assert_eq!(mesh.bounds.min, [0.0, 0.5, 0.0]);
  assert_eq!(mesh.bounds.max, [16.0, 0.5, 16.0]);
}

#[test]
fn test_meshing_is_deterministic() {
  let octree = octree(SphereGenerator::new(20.0).with_center(DVec3::new(3.2, -1.7, 4.1)));
  let key = ChunkKey::new(IVec3::new(0, -32, 0), 1);
  let finer = FaceFlags::NONE.with(Face::YMax).with(Face::XMin);
  let first = mesh_chunk(&octree, key, finer, &MeshConfig::default());
  let second = mesh_chunk(&octree, key, finer, &MeshConfig::default());
  assert!(!first.mesh.is_empty());
  assert_eq!(first, second, "Same inputs give the same mesh");
  assert_well_formed(&first.mesh);
}

#[test]
fn test_depth_zero_ignores_finer_flags() {
  let octree = octree(FlatGenerator::new(0.5));
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let plain = mesh_chunk(&octree, key, FaceFlags::NONE, &MeshConfig::default());
  let flagged = mesh_chunk(&octree, key, FaceFlags::ALL, &MeshConfig::default());
  assert_eq!(plain, flagged);
}

#[test]
fn test_edits_change_the_mesh() {
  let octree = octree(FlatGenerator::new(0.5));
  let key = ChunkKey::new(IVec3::ZERO, 0);
  let before = mesh_chunk(&octree, key, FaceFlags::NONE, &MeshConfig::default());
  octree.set_value(IVec3::new(8, 1, 8), -60).expect("inside world");
  let after = mesh_chunk(&octree, key, FaceFlags::NONE, &MeshConfig::default());
  assert!(
    after.mesh.triangle_count() > before.mesh.triangle_count(),
    "A solid bump adds triangles"
  );
  assert_well_formed(&after.mesh);
}

// =========================================================================
// Transitions
// =========================================================================

/// Ground at y = -15.5 seen by a depth-1 chunk whose -X neighbor is finer.
#[test]
fn test_finer_face_opens_transition_slab() {
  let octree = octree(FlatGenerator::new(-15.5));
  let key = ChunkKey::new(IVec3::new(0, -32, 0), 1);
  let chunk = mesh_chunk(
    &octree,
    key,
    FaceFlags::NONE.with(Face::XMin),
    &MeshConfig::default(),
  );
  let mesh = &chunk.mesh;
  assert_well_formed(mesh);

  // Full-resolution vertices stay on x = 0, the first regular column moves
  // to x = transition_width * step = 1, the next one stays at x = 2.
  let near: BTreeSet<u32> = mesh
    .vertices
    .iter()
    .map(|v| v.position[0])
    .filter(|&x| x < 2.5)
    .map(|x| {
      assert_eq!(x, x.round(), "Unexpected x = {}", x);
      x as u32
    })
    .collect();
  assert_eq!(near, BTreeSet::from([0, 1, 2]));

  for v in &mesh.vertices {
    assert!((v.position[1] - 16.5).abs() < 1e-5, "Vertex {:?} off the plane", v.position);
    assert!(v.normal[1] > 0.999, "Normal {:?} should point up", v.normal);
  }
  for normal in triangle_normals(mesh) {
    assert!(normal.y >= 0.0, "No triangle may face down, got {:?}", normal);
  }

  // Full-resolution vertices sit at every voxel along z, twice the coarse
  // density. The ends at z = 0 and z = 32 also hold pinned coarse vertices.
  let full_res = mesh
    .vertices
    .iter()
    .filter(|v| v.position[0] == 0.0 && v.position[2] > 0.0 && v.position[2] < 32.0)
    .count();
  assert_eq!(full_res, 31, "One vertex per voxel along the face edge");
}

#[test]
fn test_transition_width_scales_slab() {
  let octree = octree(FlatGenerator::new(-15.5));
  let key = ChunkKey::new(IVec3::new(0, -32, 0), 1);
  let config = MeshConfig::default().with_transition_width(0.25);
  let chunk = mesh_chunk(&octree, key, FaceFlags::NONE.with(Face::XMin), &config);
  assert!(
    chunk
      .mesh
      .vertices
      .iter()
      .any(|v| (v.position[0] - 0.5).abs() < 1e-6),
    "Width 0.25 at step 2 moves the first column to x = 0.5"
  );
}

/// A coarse chunk with a finer -X neighbor and the four fine chunks across
/// that face must agree on every vertex of the shared plane.
#[test]
fn test_seam_closes_against_finer_neighbors() {
  let octree = octree(SphereGenerator::new(10.0).with_center(DVec3::new(0.0, -16.0, -16.0)));
  let config = MeshConfig::default();

  let coarse = mesh_chunk(
    &octree,
    ChunkKey::new(IVec3::new(0, -32, -32), 1),
    FaceFlags::NONE.with(Face::XMin),
    &config,
  );
  assert_well_formed(&coarse.mesh);
  let coarse_plane: Vec<Vec3> = world_positions(&coarse)
    .into_iter()
    .filter(|p| p.x == 0.0)
    .collect();

  let mut fine_plane = Vec::new();
  for (y, z) in [(-32, -32), (-16, -32), (-32, -16), (-16, -16)] {
    let fine = mesh_chunk(
      &octree,
      ChunkKey::new(IVec3::new(-16, y, z), 0),
      FaceFlags::NONE,
      &config,
    );
    assert_well_formed(&fine.mesh);
    fine_plane.extend(world_positions(&fine).into_iter().filter(|p| p.x == 0.0));
  }

  assert!(!fine_plane.is_empty(), "The sphere crosses the shared face");
  let matched = |p: &Vec3, others: &[Vec3]| others.iter().any(|q| p.distance(*q) < 1e-3);
  for p in &fine_plane {
    assert!(matched(p, &coarse_plane), "Fine vertex {:?} has no coarse partner", p);
  }
  for p in &coarse_plane {
    assert!(matched(p, &fine_plane), "Coarse vertex {:?} has no fine partner", p);
  }
}

#[test]
fn test_no_vertex_crosses_a_finer_face() {
  let octree = octree(SphereGenerator::new(10.0).with_center(DVec3::new(0.0, -16.0, -16.0)));
  let chunk = mesh_chunk(
    &octree,
    ChunkKey::new(IVec3::new(0, -32, -32), 1),
    FaceFlags::NONE.with(Face::XMin),
    &MeshConfig::default(),
  );
  for v in &chunk.mesh.vertices {
    assert!(v.position[0] >= 0.0, "Vertex {:?} left the chunk", v.position);
  }
}

/// Density and color hashed from the position: white noise in -60..=60,
/// so exact zeros land on face planes at every depth.
struct HashNoise {
  seed: u32,
}

impl FieldGenerator for HashNoise {
  fn default_value(&self, p: IVec3) -> Density {
    let mut h = (p.x as u32).wrapping_mul(0x8da6_b343)
      ^ (p.y as u32).wrapping_mul(0xd816_3841)
      ^ (p.z as u32).wrapping_mul(0xcb1a_b31f)
      ^ self.seed.wrapping_mul(0x9e37_79b9);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2c1b_3c6d);
    h ^= h >> 12;
    ((h % 121) as i32 - 60) as Density
  }

  fn default_color(&self, _: IVec3) -> Rgba8 {
    [255; 4]
  }
}

#[test]
fn test_noise_with_every_face_finer_is_well_formed() {
  for seed in 0..6 {
    let octree = octree(HashNoise { seed });
    for key in [
      ChunkKey::new(IVec3::ZERO, 1),
      ChunkKey::new(IVec3::splat(-32), 2),
    ] {
      let chunk = mesh_chunk(&octree, key, FaceFlags::ALL, &MeshConfig::default());
      assert!(!chunk.mesh.is_empty(), "Noise crosses chunk {:?}", key);
      assert_well_formed(&chunk.mesh);
    }
  }
}

/// Directed edges of every triangle, with the number of triangles using
/// each one.
fn directed_edges(mesh: &MeshOutput) -> HashMap<(u32, u32), usize> {
  let mut edges = HashMap::new();
  for tri in mesh.indices.chunks_exact(3) {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *edges.entry((a, b)).or_insert(0) += 1;
    }
  }
  edges
}

/// True if both endpoints lie on one face plane of a `size` chunk.
fn on_chunk_boundary(mesh: &MeshOutput, a: u32, b: u32, size: f32) -> bool {
  let pa = mesh.vertices[a as usize].position;
  let pb = mesh.vertices[b as usize].position;
  (0..3).any(|axis| pa[axis] == pb[axis] && (pa[axis] == 0.0 || pa[axis] == size))
}

/// Every edge away from the chunk faces is shared by exactly two
/// triangles with opposite orientation.
fn assert_closed_inside(mesh: &MeshOutput, size: f32) {
  let edges = directed_edges(mesh);
  for (&(a, b), &count) in &edges {
    assert_eq!(count, 1, "Edge {}-{} is used {} times in one direction", a, b, count);
    if !on_chunk_boundary(mesh, a, b, size) {
      assert!(
        edges.contains_key(&(b, a)),
        "Edge {:?}-{:?} has no reversed twin",
        mesh.vertices[a as usize].position,
        mesh.vertices[b as usize].position
      );
    }
  }
}

/// Finer faces meeting along a chunk edge or at a corner emit the same
/// full-resolution vertices; each must appear once.
#[test]
fn test_finer_faces_meeting_at_corner_close_up() {
  let cases = [
    (
      DVec3::new(2.3, 2.2, 16.1),
      FaceFlags::NONE.with(Face::XMin).with(Face::YMin),
      vec![(0, 1)],
    ),
    (
      DVec3::new(2.3, 2.2, 2.1),
      FaceFlags::NONE.with(Face::XMin).with(Face::YMin).with(Face::ZMin),
      vec![(0, 1), (0, 2), (1, 2)],
    ),
  ];
  for (center, finer, shared_lines) in cases {
    let octree = octree(SphereGenerator::new(9.0).with_center(center));
    let chunk = mesh_chunk(&octree, ChunkKey::new(IVec3::ZERO, 1), finer, &MeshConfig::default());
    let mesh = &chunk.mesh;
    assert_well_formed(mesh);
    assert_closed_inside(mesh, 32.0);

    for (i, j) in shared_lines {
      let on_line: Vec<[u32; 3]> = mesh
        .vertices
        .iter()
        .map(|v| v.position)
        .filter(|p| p[i] == 0.0 && p[j] == 0.0)
        .map(|p| p.map(f32::to_bits))
        .collect();
      assert!(!on_line.is_empty(), "The sphere crosses the edge of axes {} and {}", i, j);
      let unique: HashSet<[u32; 3]> = on_line.iter().copied().collect();
      assert_eq!(
        unique.len(),
        on_line.len(),
        "Both faces' vertices on the edge of axes {} and {} merged ({:?})",
        i,
        j,
        finer
      );
    }
  }
}

// =========================================================================
// Assembly
// =========================================================================

fn raw_vertex(x: f32, y: f32, z: f32) -> RawVertex {
  RawVertex {
    position: Vec3::new(x, y, z),
    color: [255; 4],
    flags: VertexFlags::NONE,
  }
}

#[test]
fn test_collapsed_triangle_drops_its_vertices() {
  let mut raw = RawMesh::new();
  let lonely = raw.push_vertex(raw_vertex(5.0, 5.0, 5.0));
  let a = raw.push_vertex(raw_vertex(0.0, 0.0, 0.0));
  let a_twin = raw.push_vertex(raw_vertex(0.0, 0.0, 0.0));
  let b = raw.push_vertex(raw_vertex(1.0, 0.0, 0.0));
  let c = raw.push_vertex(raw_vertex(0.0, 0.0, 1.0));
  raw.transition.push([lonely, a, a_twin]);
  raw.transition.push([a_twin, c, b]);
  raw.equivalences.push((a, a_twin));

  let frame = TransitionFrame::new(ChunkKey::new(IVec3::ZERO, 1), FaceFlags::NONE, &MeshConfig::default());
  let mesh = assemble(&raw, frame);
  assert_eq!(mesh.triangle_count(), 1, "The merged triangle is degenerate");
  assert_eq!(
    mesh.vertices.len(),
    3,
    "A vertex used only by a collapsed triangle is not emitted"
  );
  assert_well_formed(&mesh);
}

// =========================================================================
// Union-find
// =========================================================================

#[test]
fn test_union_find_keeps_smallest_representative() {
  let mut sets = UnionFind::new(6);
  sets.union(4, 2);
  sets.union(5, 4);
  sets.union(3, 1);
  assert_eq!(sets.find(5), 2);
  assert_eq!(sets.find(4), 2);
  assert_eq!(sets.find(3), 1);
  sets.union(5, 3);
  assert_eq!(sets.find(2), 1, "Merging two sets keeps the smaller root");
  assert_eq!(sets.find(0), 0);
}
