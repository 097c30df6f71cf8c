//! Regular cell polygonization with vertex reuse.
//!
//! ```text
//! code  = sign bits of the 8 corners (bit i set when corner i < 0)
//! class = REGULAR_CELL_CLASS[code]
//! verts = REGULAR_VERTEX_DATA[code]  (one 16-bit code per vertex)
//! tris  = REGULAR_CELL_DATA[class]
//! ```
//!
//! A vertex code names the crossing edge and where its vertex lives:
//! owned by this cell, or owned by the neighbor at `cell - dir`. Corner
//! vertices (density exactly zero) live in slot 0 of the cell whose
//! corner 7 they are.

use glam::{IVec3, Vec3};
use smallvec::SmallVec;

use super::{edge_crossing, near_flags, on_face_plane, RawMesh, RawTriangle, RawVertex, SeamKey};
use super::{SeamLayer, VertexFlags};
use crate::constants::{CHUNK_CELLS, CORNER_OFFSETS, NO_VERTEX};
use crate::sampling::VoxelAccess;
use crate::tables::{
  regular_case_code, VertexCode, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA,
};
use crate::types::{Density, FaceFlags, Rgba8};

/// Lattice offset towards the owner of a vertex with reuse bits `dir`.
#[inline]
fn reuse_offset(dir: u8) -> IVec3 {
  IVec3::new(
    (dir & 1) as i32,
    ((dir >> 1) & 1) as i32,
    ((dir >> 2) & 1) as i32,
  )
}

/// Polygonizes regular cells of one chunk.
#[derive(Clone, Copy, Debug)]
pub struct RegularPolygonizer {
  finer: FaceFlags,
}

/// Per-cell state shared by the vertex helpers.
struct CellContext {
  cell: IVec3,
  validity: u8,
  corners: [IVec3; 8],
  values: [Density; 8],
  step: i32,
  size: i32,
}

impl RegularPolygonizer {
  /// `finer` marks faces whose on-plane vertices are shared with
  /// transition cells.
  pub fn new(finer: FaceFlags) -> Self {
    Self { finer }
  }

  /// Polygonize one cell. Returns the number of triangles emitted.
  ///
  /// `validity` has bit `k` set when the neighbor cell one step down axis
  /// `k` was already processed. `real` marks cells inside the chunk;
  /// halo triangles only contribute to normals.
  pub fn polygonize_cell<A: VoxelAccess>(
    &self,
    access: &mut A,
    mesh: &mut RawMesh,
    cell: IVec3,
    validity: u8,
    real: bool,
  ) -> usize {
    let step = 1 << access.depth();
    let base = cell * step;
    let corners = CORNER_OFFSETS.map(|offset| base + offset * step);
    let values = corners.map(|p| access.value(p));
    let code = regular_case_code(&values);
    if code == 0 || code == 0xFF {
      return 0;
    }

    let ctx = CellContext {
      cell,
      validity,
      corners,
      values,
      step,
      size: CHUNK_CELLS * step,
    };
    let data = &REGULAR_CELL_DATA[REGULAR_CELL_CLASS[code as usize] as usize];
    let codes = &REGULAR_VERTEX_DATA[code as usize];

    let mut corner_vertices = [NO_VERTEX; 8];
    let mut cell_vertices: SmallVec<[u32; 12]> = SmallVec::new();
    for &raw in &codes[..data.vertex_count()] {
      let code = VertexCode(raw);
      let (a, b) = (code.corner_a(), code.corner_b());
      let index = if values[b] == 0 {
        self.corner_vertex(access, mesh, &ctx, b, &mut corner_vertices)
      } else if values[a] == 0 {
        self.corner_vertex(access, mesh, &ctx, a, &mut corner_vertices)
      } else {
        self.edge_vertex(access, mesh, &ctx, code)
      };
      cell_vertices.push(index);
    }

    for tri in data.indices().chunks_exact(3) {
      mesh.regular.push(RawTriangle {
        indices: [
          cell_vertices[tri[0] as usize],
          cell_vertices[tri[1] as usize],
          cell_vertices[tri[2] as usize],
        ],
        real,
      });
    }
    data.triangle_count()
  }

  fn edge_vertex<A: VoxelAccess>(
    &self,
    access: &mut A,
    mesh: &mut RawMesh,
    ctx: &CellContext,
    code: VertexCode,
  ) -> u32 {
    let slot = code.slot();
    let dir = code.reuse_dir();
    if code.is_owned() {
      let index = self.create_edge_vertex(access, mesh, ctx, code);
      access.save_vertex(ctx.cell, slot, index);
      return index;
    }
    if ctx.validity & dir != dir {
      return self.create_edge_vertex(access, mesh, ctx, code);
    }
    let owner = ctx.cell - reuse_offset(dir);
    match access.load_vertex(owner, slot) {
      Some(index) => index,
      None => {
        let index = self.create_edge_vertex(access, mesh, ctx, code);
        access.save_vertex(owner, slot, index);
        index
      }
    }
  }

  fn create_edge_vertex<A: VoxelAccess>(
    &self,
    access: &A,
    mesh: &mut RawMesh,
    ctx: &CellContext,
    code: VertexCode,
  ) -> u32 {
    let (a, b) = (code.corner_a(), code.corner_b());
    let (pa, pb) = (ctx.corners[a], ctx.corners[b]);
    let position = edge_crossing(access, pa, pb);
    let solid = if ctx.values[a] < 0 { pa } else { pb };
    let index = push(mesh, ctx, position, access.color(solid));

    let (ca, cb) = (access.to_chunk(pa), access.to_chunk(pb));
    if on_face_plane(ca, cb, self.finer, ctx.size) {
      mesh.register_seam(SeamKey::edge(SeamLayer::Low, ca, cb), index);
    }
    index
  }

  fn corner_vertex<A: VoxelAccess>(
    &self,
    access: &mut A,
    mesh: &mut RawMesh,
    ctx: &CellContext,
    corner: usize,
    memo: &mut [u32; 8],
  ) -> u32 {
    if memo[corner] != NO_VERTEX {
      return memo[corner];
    }
    let dir = (corner ^ 7) as u8;
    let index = if ctx.validity & dir != dir {
      self.create_corner_vertex(access, mesh, ctx, corner)
    } else {
      let owner = ctx.cell - reuse_offset(dir);
      match access.load_vertex(owner, 0) {
        Some(index) => index,
        None => {
          let index = self.create_corner_vertex(access, mesh, ctx, corner);
          access.save_vertex(owner, 0, index);
          index
        }
      }
    };
    memo[corner] = index;
    index
  }

  fn create_corner_vertex<A: VoxelAccess>(
    &self,
    access: &A,
    mesh: &mut RawMesh,
    ctx: &CellContext,
    corner: usize,
  ) -> u32 {
    let local = ctx.corners[corner];
    let p = access.to_chunk(local);
    let index = push(mesh, ctx, p.as_vec3(), access.color(local));
    if on_face_plane(p, p, self.finer, ctx.size) {
      mesh.register_seam(SeamKey::point(SeamLayer::Low, p), index);
    }
    index
  }
}

fn push(mesh: &mut RawMesh, ctx: &CellContext, position: Vec3, color: Rgba8) -> u32 {
  let flags = near_flags(position, ctx.step as f32, ctx.size as f32) | VertexFlags::TRANSLATE;
  mesh.push_vertex(RawVertex {
    position,
    color,
    flags,
  })
}

#[cfg(test)]
#[path = "regular_test.rs"]
mod regular_test;
