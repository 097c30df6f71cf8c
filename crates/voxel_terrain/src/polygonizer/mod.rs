//! Cell polygonizers and the raw mesh they append to.
//!
//! The regular polygonizer covers the chunk's 16³ cells plus a one-cell
//! halo; the transition polygonizer covers 16×16 cells along each face that
//! borders a finer chunk. Both write into one [`RawMesh`]: unmerged
//! vertices, triangles, and the equivalences that tie vertices emitted
//! twice for the same seam point together.
//!
//! # Edge Interpolation
//!
//! ```text
//! endpoints A < B (lexicographic, chunk space)
//!
//! while |B - A| > 1 voxel:
//!   M = (A + B) / 2
//!   sign(M) == sign(A) ? A = M : B = M
//!
//! t = vB / (vB - vA)
//! Q = t·A + (1 - t)·B
//! ```
//!
//! Ordering the endpoints first makes the result independent of which cell
//! asked, so both sides of a seam land on the same point.

pub mod regular;
pub mod transition;

#[cfg(test)]
pub(crate) mod test_utils;

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::sampling::VoxelAccess;
use crate::types::{Density, Face, FaceFlags, Rgba8};
pub use regular::RegularPolygonizer;
pub use transition::TransitionPolygonizer;

/// Per-vertex bookkeeping for assembly.
///
/// There is no normal-only flag: [`crate::assembler::assemble`] treats a
/// vertex as normal-only unless a surviving real triangle references it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VertexFlags(pub u8);

impl VertexFlags {
  pub const NONE: VertexFlags = VertexFlags(0);
  /// Moved inward next to faces that border a finer chunk.
  pub const TRANSLATE: VertexFlags = VertexFlags(1 << 6);

  /// Set when the vertex lies within one cell of `face`.
  #[inline]
  pub const fn near(face: Face) -> VertexFlags {
    VertexFlags(face.bit())
  }

  #[inline]
  pub const fn contains(self, other: VertexFlags) -> bool {
    self.0 & other.0 == other.0
  }

  #[inline]
  pub const fn union(self, other: VertexFlags) -> VertexFlags {
    VertexFlags(self.0 | other.0)
  }

  /// Faces this vertex is near.
  pub fn near_faces(self) -> FaceFlags {
    FaceFlags(self.0 & FaceFlags::ALL.0)
  }
}

impl std::ops::BitOr for VertexFlags {
  type Output = VertexFlags;

  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl std::ops::BitOrAssign for VertexFlags {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

/// Vertex before merging and translation, in chunk-local voxels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawVertex {
  pub position: Vec3,
  pub color: Rgba8,
  pub flags: VertexFlags,
}

/// Which side of a transition a seam vertex belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeamLayer {
  /// Full-resolution face samples, shared with the finer neighbor.
  Fine,
  /// Coarse face samples, shared with the regular cells.
  Low,
}

/// Identity of a vertex lying on a chunk face: the lattice edge (or point)
/// it was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeamKey {
  pub layer: SeamLayer,
  pub a: IVec3,
  pub b: IVec3,
}

impl SeamKey {
  /// Key for the edge between `a` and `b`, in either order.
  pub fn edge(layer: SeamLayer, a: IVec3, b: IVec3) -> Self {
    let (a, b) = ordered(a, b);
    Self { layer, a, b }
  }

  /// Key for a vertex sitting exactly on lattice point `p`.
  pub fn point(layer: SeamLayer, p: IVec3) -> Self {
    Self { layer, a: p, b: p }
  }
}

/// Triangle produced by a regular cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawTriangle {
  pub indices: [u32; 3],
  /// False for halo cells, whose triangles only feed normals.
  pub real: bool,
}

/// Polygonizer output for one chunk.
#[derive(Debug, Default)]
pub struct RawMesh {
  pub vertices: Vec<RawVertex>,
  pub regular: Vec<RawTriangle>,
  pub transition: Vec<[u32; 3]>,
  /// `(anchor, duplicate)` pairs for vertices emitted more than once.
  pub equivalences: Vec<(u32, u32)>,
  seams: HashMap<SeamKey, u32>,
}

impl RawMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a vertex and return its index.
  pub fn push_vertex(&mut self, vertex: RawVertex) -> u32 {
    self.vertices.push(vertex);
    (self.vertices.len() - 1) as u32
  }

  /// Record `index` under `key`. The first vertex seen for a key anchors
  /// it; later ones become equivalent to the anchor.
  pub fn register_seam(&mut self, key: SeamKey, index: u32) {
    match self.seams.get(&key) {
      Some(&anchor) if anchor != index => self.equivalences.push((anchor, index)),
      Some(_) => {}
      None => {
        self.seams.insert(key, index);
      }
    }
  }

  /// True if no cell emitted a triangle.
  pub fn is_empty(&self) -> bool {
    self.regular.is_empty() && self.transition.is_empty()
  }
}

/// Lexicographic order on lattice points.
#[inline]
pub(crate) fn ordered(a: IVec3, b: IVec3) -> (IVec3, IVec3) {
  if b.to_array() < a.to_array() {
    (b, a)
  } else {
    (a, b)
  }
}

/// Surface crossing on the cell-space edge `a`-`b`, in chunk-local voxels.
///
/// The edge must have a sign change and span a power-of-two number of
/// voxels along one axis.
pub(crate) fn edge_crossing<A: VoxelAccess>(access: &A, a: IVec3, b: IVec3) -> Vec3 {
  let (mut a, mut b) = if access.to_chunk(b).to_array() < access.to_chunk(a).to_array() {
    (b, a)
  } else {
    (a, b)
  };
  let mut va = access.value(a);
  let mut vb = access.value(b);
  debug_assert_ne!(va < 0, vb < 0, "edge {:?}-{:?} has no sign change", a, b);

  let mut length = (b - a).abs().max_element();
  while length > 1 {
    let mid = (a + b) / 2;
    let vm = access.value(mid);
    if (vm < 0) == (va < 0) {
      a = mid;
      va = vm;
    } else {
      b = mid;
      vb = vm;
    }
    length /= 2;
  }

  interpolate(access.to_chunk(a), va, access.to_chunk(b), vb)
}

#[inline]
fn interpolate(pa: IVec3, va: Density, pb: IVec3, vb: Density) -> Vec3 {
  assert_ne!(va, vb, "interpolating an edge without a sign change");
  let t = vb as f32 / (vb as f32 - va as f32);
  pa.as_vec3() * t + pb.as_vec3() * (1.0 - t)
}

/// Faces of a `size`-voxel chunk that `p` lies within one `step` of.
pub(crate) fn near_flags(p: Vec3, step: f32, size: f32) -> VertexFlags {
  let mut flags = VertexFlags::NONE;
  for face in Face::ALL {
    let v = p[face.axis()];
    let near = if face.is_max() { v > size - step } else { v < step };
    if near {
      flags |= VertexFlags::near(face);
    }
  }
  flags
}

/// True if lattice points `a` and `b` both lie on the plane of one face in
/// `faces`.
pub(crate) fn on_face_plane(a: IVec3, b: IVec3, faces: FaceFlags, size: i32) -> bool {
  faces.iter().any(|face| {
    let plane = if face.is_max() { size } else { 0 };
    a[face.axis()] == plane && b[face.axis()] == plane
  })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
