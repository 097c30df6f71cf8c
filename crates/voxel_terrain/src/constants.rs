//! Lattice and window layout constants for 16³-cell chunks.
//!
//! Every chunk covers 16 cells per axis at its own step (`1 << depth`
//! voxels). Meshing jobs snapshot an 18-sample window per axis so that cell
//! corner lookups for the chunk and its one-cell halo never leave the array.
//!
//! # Sampling Window Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SAMPLING WINDOW (per axis)                        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Lattice coord: -1    0     1    ...    15    16    (17)                │
//! │  Window index:   0    1     2    ...    16    17     --                 │
//! │                  │    │                  │     │     │                  │
//! │                  │    └── 16 chunk cells ┘     │     └─ read through    │
//! │                  │        (0..=15)             │        to the octree   │
//! │                  └─ negative halo              └─ positive boundary     │
//! │                                                                         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Regular cells are polygonized for -1..=16. Cells -1 and 16 are halo    │
//! │  cells: their triangles only feed normal accumulation.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        +Z
//!
//! Cell corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

use glam::IVec3;

/// Cells per chunk axis.
pub const CHUNK_CELLS: i32 = 16;

/// Samples per window axis (16 cells + halo on both sides).
pub const WINDOW_SIZE: usize = 18;

/// Window samples squared (18² = 324)
pub const WINDOW_SIZE_SQ: usize = WINDOW_SIZE * WINDOW_SIZE;

/// Total window samples (18³ = 5832)
pub const WINDOW_SIZE_CB: usize = WINDOW_SIZE * WINDOW_SIZE * WINDOW_SIZE;

/// Lowest lattice coordinate held by the window.
pub const WINDOW_MIN: i32 = -1;

/// Highest lattice coordinate held by the window.
pub const WINDOW_MAX: i32 = WINDOW_MIN + WINDOW_SIZE as i32 - 1;

/// First regular cell polygonized per axis (halo).
pub const FIRST_CELL: i32 = -1;

/// Last regular cell polygonized per axis (halo).
pub const LAST_CELL: i32 = CHUNK_CELLS;

/// Voxels per value-octree leaf axis.
pub const LEAF_SIZE: i32 = 16;

/// Dense samples per value-octree leaf (16³ = 4096).
pub const LEAF_VOLUME: usize = (LEAF_SIZE * LEAF_SIZE * LEAF_SIZE) as usize;

/// Largest representable density magnitude.
pub const MAX_DENSITY: i8 = 127;

/// Deepest octree supported; `create_tree` is eager, so memory grows as 8^depth.
pub const MAX_OCTREE_DEPTH: u32 = 6;

/// Vertex slots per regular cell in the rolling Z-slice cache.
pub const REGULAR_CACHE_SLOTS: usize = 4;

/// Vertex slots per transition cell in a face cache.
pub const TRANSITION_CACHE_SLOTS: usize = 10;

/// Sentinel stored in vertex caches for "no vertex yet".
pub const NO_VERTEX: u32 = u32::MAX;

/// Lattice offsets of the 8 cell corners, in corner-index order.
pub const CORNER_OFFSETS: [IVec3; 8] = [
  IVec3::new(0, 0, 0),
  IVec3::new(1, 0, 0),
  IVec3::new(0, 1, 0),
  IVec3::new(1, 1, 0),
  IVec3::new(0, 0, 1),
  IVec3::new(1, 0, 1),
  IVec3::new(0, 1, 1),
  IVec3::new(1, 1, 1),
];

/// Window index for a lattice coordinate in `WINDOW_MIN..=WINDOW_MAX`.
///
/// Layout: X is minor (stride 1), Y is middle (stride 18), Z is major
/// (stride 324).
#[inline(always)]
pub const fn window_index(x: i32, y: i32, z: i32) -> usize {
  let x = (x - WINDOW_MIN) as usize;
  let y = (y - WINDOW_MIN) as usize;
  let z = (z - WINDOW_MIN) as usize;
  x + y * WINDOW_SIZE + z * WINDOW_SIZE_SQ
}

/// Lattice coordinate for a window index.
#[inline(always)]
pub const fn window_coord(idx: usize) -> (i32, i32, i32) {
  let x = (idx % WINDOW_SIZE) as i32 + WINDOW_MIN;
  let y = ((idx / WINDOW_SIZE) % WINDOW_SIZE) as i32 + WINDOW_MIN;
  let z = (idx / WINDOW_SIZE_SQ) as i32 + WINDOW_MIN;
  (x, y, z)
}

/// Dense index inside a value-octree leaf.
#[inline(always)]
pub const fn leaf_index(x: i32, y: i32, z: i32) -> usize {
  (x + y * LEAF_SIZE + z * LEAF_SIZE * LEAF_SIZE) as usize
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
