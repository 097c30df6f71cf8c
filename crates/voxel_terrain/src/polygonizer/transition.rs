//! Transition cell polygonization along a face bordering a finer chunk.
//!
//! Each coarse cell touching the face gets a transition cell in face-local
//! space. Its full-resolution samples sit on the face at half-step spacing;
//! the low-resolution samples copy the four coarse corners and share their
//! vertices with the regular cells behind.
//!
//! ```text
//! sample i of cell (X, Y):
//!   i < 9   (X·s + (i % 3)·h, Y·s + (i / 3)·h, 0)   h = s / 2
//!   i >= 9  same position as sample 0, 2, 6, 8
//! ```
//!
//! Full-resolution vertices are final: they match the finer neighbor's
//! regular vertices exactly. Low-resolution vertices are translated inward
//! with the regular vertices during assembly.

use glam::{IVec3, Vec3};
use smallvec::SmallVec;

use super::{edge_crossing, near_flags, RawMesh, RawVertex, SeamKey, SeamLayer, VertexFlags};
use crate::constants::{CHUNK_CELLS, NO_VERTEX};
use crate::sampling::VoxelAccess;
use crate::tables::{
  transition_case_code, VertexCode, TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA,
  TRANSITION_LOW_RES_SOURCE, TRANSITION_VERTEX_DATA,
};
use crate::types::{Density, Face, Rgba8};

const SAMPLES: usize = 13;

/// Polygonizes the transition cells of one chunk face.
#[derive(Clone, Copy, Debug)]
pub struct TransitionPolygonizer {
  face: Face,
}

struct TransitionContext {
  cell: IVec3,
  validity: u8,
  samples: [IVec3; SAMPLES],
  values: [Density; SAMPLES],
  step: i32,
  size: i32,
}

#[inline]
fn is_low_res(sample: usize) -> bool {
  sample >= 9
}

impl TransitionPolygonizer {
  /// Polygonizer for the transition cells along `face`.
  pub fn new(face: Face) -> Self {
    Self { face }
  }

  pub fn face(&self) -> Face {
    self.face
  }

  /// Polygonize transition cell `(X, Y)` (passed as `cell.xy`, `cell.z` = 0).
  /// Returns the number of triangles emitted.
  ///
  /// `validity` bit 0 is set when cell `X - 1` was processed, bit 1 when
  /// cell `Y - 1` was.
  pub fn polygonize_cell<A: VoxelAccess>(
    &self,
    access: &mut A,
    mesh: &mut RawMesh,
    cell: IVec3,
    validity: u8,
  ) -> usize {
    let step = 1 << access.depth();
    debug_assert!(step >= 2, "transition cells need a finer neighbor");
    let half = step / 2;

    let mut samples = [IVec3::ZERO; SAMPLES];
    for (i, sample) in samples.iter_mut().take(9).enumerate() {
      let i = i as i32;
      *sample = IVec3::new(
        cell.x * step + (i % 3) * half,
        cell.y * step + (i / 3) * half,
        0,
      );
    }
    for (k, &source) in TRANSITION_LOW_RES_SOURCE.iter().enumerate() {
      samples[9 + k] = samples[source];
    }

    let full: [Density; 9] = std::array::from_fn(|i| access.value(samples[i]));
    let values: [Density; SAMPLES] = std::array::from_fn(|i| match i {
      0..=8 => full[i],
      _ => full[TRANSITION_LOW_RES_SOURCE[i - 9]],
    });
    let code = transition_case_code(&full);
    if code == 0 || code == 0x1FF {
      return 0;
    }

    let ctx = TransitionContext {
      cell,
      validity,
      samples,
      values,
      step,
      size: CHUNK_CELLS * step,
    };
    let data = &TRANSITION_CELL_DATA[TRANSITION_CELL_CLASS[code as usize] as usize];
    let codes = &TRANSITION_VERTEX_DATA[code as usize];

    let mut sample_vertices = [NO_VERTEX; SAMPLES];
    let mut cell_vertices: SmallVec<[u32; 12]> = SmallVec::new();
    for &raw in &codes[..data.vertex_count()] {
      let code = VertexCode(raw);
      let (a, b) = (code.corner_a(), code.corner_b());
      let index = if values[b] == 0 {
        self.sample_vertex(access, mesh, &ctx, b, &mut sample_vertices)
      } else if values[a] == 0 {
        self.sample_vertex(access, mesh, &ctx, a, &mut sample_vertices)
      } else {
        self.edge_vertex(access, mesh, &ctx, code)
      };
      cell_vertices.push(index);
    }

    for tri in data.indices().chunks_exact(3) {
      mesh.transition.push([
        cell_vertices[tri[0] as usize],
        cell_vertices[tri[1] as usize],
        cell_vertices[tri[2] as usize],
      ]);
    }
    data.triangle_count()
  }

  fn edge_vertex<A: VoxelAccess>(
    &self,
    access: &mut A,
    mesh: &mut RawMesh,
    ctx: &TransitionContext,
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
    let owner = ctx.cell - IVec3::new((dir & 1) as i32, ((dir >> 1) & 1) as i32, 0);
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
    ctx: &TransitionContext,
    code: VertexCode,
  ) -> u32 {
    let (a, b) = (code.corner_a(), code.corner_b());
    let (pa, pb) = (ctx.samples[a], ctx.samples[b]);
    let position = edge_crossing(access, pa, pb);
    let solid = if ctx.values[a] < 0 { pa } else { pb };
    let low = is_low_res(a);
    let index = push(mesh, ctx, position, access.color(solid), low);

    let layer = if low { SeamLayer::Low } else { SeamLayer::Fine };
    let key = SeamKey::edge(layer, access.to_chunk(pa), access.to_chunk(pb));
    mesh.register_seam(key, index);
    index
  }

  /// Vertex on a sample whose density is exactly zero.
  fn sample_vertex<A: VoxelAccess>(
    &self,
    access: &A,
    mesh: &mut RawMesh,
    ctx: &TransitionContext,
    sample: usize,
    memo: &mut [u32; SAMPLES],
  ) -> u32 {
    if memo[sample] != NO_VERTEX {
      return memo[sample];
    }
    let local = ctx.samples[sample];
    let p = access.to_chunk(local);
    let low = is_low_res(sample);
    let index = push(mesh, ctx, p.as_vec3(), access.color(local), low);
    let layer = if low { SeamLayer::Low } else { SeamLayer::Fine };
    mesh.register_seam(SeamKey::point(layer, p), index);
    memo[sample] = index;
    index
  }
}

fn push(mesh: &mut RawMesh, ctx: &TransitionContext, position: Vec3, color: Rgba8, low: bool) -> u32 {
  let mut flags = near_flags(position, ctx.step as f32, ctx.size as f32);
  if low {
    flags |= VertexFlags::TRANSLATE;
  }
  mesh.push_vertex(RawVertex {
    position,
    color,
    flags,
  })
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
