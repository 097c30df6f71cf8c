//! Chunk mesh assembly.
//!
//! ```text
//! SamplingCache ──► transition cells (per finer face)
//!               └─► regular cells (-1..=16)³
//!                        │
//!                        ▼
//!                     RawMesh ──► merge seam duplicates (union-find)
//!                                 ──► keep vertices used by real triangles
//!                                 ──► normals from regular triangles
//!                                 ──► translate near finer faces
//!                                 ──► add transition normals, tangents
//!                                 ──► MeshOutput (chunk-local)
//! ```

pub mod translation;

use glam::{IVec3, Vec3};
use tracing::trace;

use crate::chunk_octree::ChunkKey;
use crate::constants::{CHUNK_CELLS, FIRST_CELL, LAST_CELL};
use crate::generator::FieldGenerator;
use crate::polygonizer::{RawMesh, RegularPolygonizer, TransitionPolygonizer, VertexFlags};
use crate::sampling::{CacheView, FaceSpace, RegularSpace, SamplingCache};
use crate::types::{FaceFlags, MeshConfig, MeshOutput, MinMaxAABB, Vertex};
use crate::value_octree::ValueOctree;
pub use translation::TransitionFrame;

/// Finished mesh of one chunk, in chunk-local voxels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
  pub key: ChunkKey,
  pub mesh: MeshOutput,
}

impl ChunkMesh {
  /// World-space offset of the chunk-local positions.
  pub fn origin(&self) -> IVec3 {
    self.key.origin
  }
}

/// Mesh the chunk `key` against the current contents of `octree`.
///
/// `finer` lists faces bordering a finer chunk. Depth-0 chunks ignore it.
#[cfg_attr(
  feature = "instrument",
  tracing::instrument(skip_all, name = "assembler::mesh_chunk", fields(key = ?key))
)]
pub fn mesh_chunk<G: FieldGenerator>(
  octree: &ValueOctree<G>,
  key: ChunkKey,
  finer: FaceFlags,
  config: &MeshConfig,
) -> ChunkMesh {
  let finer = if key.depth == 0 { FaceFlags::NONE } else { finer };
  let mut cache = SamplingCache::new(octree, key, finer);
  if cache.is_homogeneous() && finer.is_empty() {
    return ChunkMesh {
      key,
      mesh: MeshOutput::new(),
    };
  }

  let raw = polygonize(&mut cache);
  let mesh = assemble(&raw, TransitionFrame::new(key, finer, config));
  trace!(
    ?key,
    raw_vertices = raw.vertices.len(),
    vertices = mesh.vertices.len(),
    triangles = mesh.triangle_count(),
    "chunk assembled"
  );
  ChunkMesh { key, mesh }
}

/// Run every transition and regular cell of the chunk.
pub fn polygonize<G: FieldGenerator>(cache: &mut SamplingCache<'_, G>) -> RawMesh {
  let mut raw = RawMesh::new();
  let key = cache.key();
  let finer = cache.finer();

  for face in finer.iter() {
    let polygonizer = TransitionPolygonizer::new(face);
    let mut view = CacheView::new(cache, FaceSpace::new(polygonizer.face(), key.size()));
    for y in 0..CHUNK_CELLS {
      for x in 0..CHUNK_CELLS {
        let validity = (x > 0) as u8 | ((y > 0) as u8) << 1;
        polygonizer.polygonize_cell(&mut view, &mut raw, IVec3::new(x, y, 0), validity);
      }
    }
  }

  let polygonizer = RegularPolygonizer::new(finer);
  let real_cells = 0..CHUNK_CELLS;
  for z in FIRST_CELL..=LAST_CELL {
    cache.vertices_mut().begin_slice(z);
    let mut view = CacheView::new(cache, RegularSpace);
    for y in FIRST_CELL..=LAST_CELL {
      for x in FIRST_CELL..=LAST_CELL {
        let validity =
          (x > FIRST_CELL) as u8 | ((y > FIRST_CELL) as u8) << 1 | ((z > FIRST_CELL) as u8) << 2;
        let real =
          real_cells.contains(&x) && real_cells.contains(&y) && real_cells.contains(&z);
        polygonizer.polygonize_cell(&mut view, &mut raw, IVec3::new(x, y, z), validity, real);
      }
    }
  }
  raw
}

/// Disjoint sets over raw vertex indices. The smallest index of a set is
/// its representative.
struct UnionFind {
  parent: Vec<u32>,
}

impl UnionFind {
  fn new(len: usize) -> Self {
    Self {
      parent: (0..len as u32).collect(),
    }
  }

  fn find(&mut self, mut i: u32) -> u32 {
    while self.parent[i as usize] != i {
      let grandparent = self.parent[self.parent[i as usize] as usize];
      self.parent[i as usize] = grandparent;
      i = grandparent;
    }
    i
  }

  fn union(&mut self, a: u32, b: u32) {
    let (ra, rb) = (self.find(a), self.find(b));
    if ra != rb {
      let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
      self.parent[high as usize] = low;
    }
  }
}

#[inline]
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
  (b - a).cross(c - a)
}

/// True if merging folded two corners of the triangle together.
#[inline]
fn is_degenerate([a, b, c]: [u32; 3]) -> bool {
  a == b || b == c || a == c
}

/// Triangles that end up in the output: regular triangles of chunk cells
/// and every transition triangle.
fn real_triangles(raw: &RawMesh) -> impl Iterator<Item = [u32; 3]> + '_ {
  raw
    .regular
    .iter()
    .filter(|t| t.real)
    .map(|t| t.indices)
    .chain(raw.transition.iter().copied())
}

/// Turn a raw mesh into the final chunk mesh.
pub fn assemble(raw: &RawMesh, frame: TransitionFrame) -> MeshOutput {
  let n = raw.vertices.len();
  let mut sets = UnionFind::new(n);
  for &(anchor, duplicate) in &raw.equivalences {
    sets.union(anchor, duplicate);
  }
  let rep: Vec<u32> = (0..n as u32).map(|i| sets.find(i)).collect();
  let canonical = |tri: [u32; 3]| tri.map(|i| rep[i as usize]);

  let mut flags = vec![VertexFlags::NONE; n];
  for (i, vertex) in raw.vertices.iter().enumerate() {
    flags[rep[i] as usize] |= vertex.flags;
  }

  // Triangles collapsed by the merge are dropped below, so they must not
  // keep their vertices alive either.
  let mut real = vec![false; n];
  for tri in real_triangles(raw).map(canonical).filter(|&t| !is_degenerate(t)) {
    for i in tri {
      real[i as usize] = true;
    }
  }

  // Final index of every real representative, in raw order.
  let mut remap: Vec<Option<u32>> = vec![None; n];
  let mut order = Vec::new();
  for (i, &r) in rep.iter().enumerate() {
    let r = r as usize;
    if r == i && real[r] {
      remap[r] = Some(order.len() as u32);
      order.push(r);
    }
  }

  let mut positions: Vec<Vec3> = raw.vertices.iter().map(|v| v.position).collect();
  let mut normals = vec![Vec3::ZERO; n];
  let mut tangents = vec![Vec3::ZERO; n];

  // Regular triangles, halo included, on untranslated positions.
  for tri in raw.regular.iter().map(|t| canonical(t.indices)) {
    let [a, b, c] = tri.map(|i| positions[i as usize]);
    let normal = face_normal(a, b, c);
    for i in tri {
      normals[i as usize] += normal;
      tangents[i as usize] += b - a;
    }
  }
  for &r in &order {
    normals[r] = normals[r].normalize_or_zero();
  }

  if frame.is_active() {
    for &r in &order {
      if flags[r].contains(VertexFlags::TRANSLATE) {
        positions[r] = frame.translate(positions[r], normals[r]);
      }
    }
  }

  // Transition triangles only exist after translation opened their slab.
  for tri in raw.transition.iter().map(|&t| canonical(t)) {
    let [a, b, c] = tri.map(|i| positions[i as usize]);
    let normal = face_normal(a, b, c);
    for i in tri {
      normals[i as usize] += normal;
      tangents[i as usize] += b - a;
    }
  }

  let mut output = MeshOutput::new();
  output.vertices.reserve(order.len());
  let mut bounds = MinMaxAABB::empty();
  for &r in &order {
    let normal = normals[r].try_normalize().unwrap_or(Vec3::Y);
    let tangent = tangents[r] - normal * normal.dot(tangents[r]);
    let tangent = tangent
      .try_normalize()
      .unwrap_or_else(|| normal.any_orthonormal_vector());
    let position = positions[r].to_array();
    bounds.encapsulate(position);
    output.vertices.push(Vertex {
      position,
      normal: normal.to_array(),
      tangent: tangent.to_array(),
      color: raw.vertices[r].color,
    });
  }

  for tri in real_triangles(raw) {
    let [a, b, c] = canonical(tri);
    if is_degenerate([a, b, c]) {
      continue;
    }
    if let (Some(a), Some(b), Some(c)) = (remap[a as usize], remap[b as usize], remap[c as usize]) {
      output.indices.extend_from_slice(&[a, b, c]);
    }
  }

  output.bounds = bounds;
  output
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
