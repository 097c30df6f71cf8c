//! Regular-cell case tables.
//!
//! `REGULAR_CELL_CLASS` maps an 8-bit case code (bit i set when corner i is
//! solid) to one of 18 equivalence classes. `REGULAR_CELL_DATA` holds the
//! class triangulation, and `REGULAR_VERTEX_DATA` the 16-bit vertex codes for
//! each case, listed in the order the class triangles refer to them.
//!
//! Faces with two diagonal solid corners always keep those corners apart, so
//! any two cells sharing a face agree on its topology.

/// Triangulation of one regular-cell equivalence class.
#[derive(Clone, Copy, Debug)]
pub struct RegularCellData {
  /// High nibble = vertex count, low nibble = triangle count.
  geometry_counts: u8,
  /// Vertex indices, 3 per triangle.
  vertex_index: [u8; 15],
}

impl RegularCellData {
  pub const fn new(geometry_counts: u8, vertex_index: [u8; 15]) -> Self {
    Self {
      geometry_counts,
      vertex_index,
    }
  }

  #[inline]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  #[inline]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Vertex indices of the class triangles.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.vertex_index[..self.triangle_count() * 3]
  }
}

#[rustfmt::skip]
pub const REGULAR_CELL_CLASS: [u8; 256] = [
  0x00, 0x01, 0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 0x01, 0x03, 0x02, 0x04, 0x02, 0x04, 0x04, 0x02,
  0x01, 0x02, 0x03, 0x04, 0x03, 0x04, 0x05, 0x06, 0x03, 0x07, 0x07, 0x06, 0x07, 0x06, 0x08, 0x04,
  0x01, 0x03, 0x02, 0x04, 0x03, 0x07, 0x07, 0x06, 0x03, 0x05, 0x04, 0x06, 0x07, 0x08, 0x06, 0x04,
  0x02, 0x04, 0x04, 0x02, 0x07, 0x06, 0x08, 0x04, 0x07, 0x08, 0x06, 0x04, 0x09, 0x0A, 0x0B, 0x02,
  0x01, 0x03, 0x03, 0x07, 0x02, 0x04, 0x07, 0x06, 0x03, 0x05, 0x07, 0x08, 0x04, 0x06, 0x06, 0x04,
  0x02, 0x04, 0x07, 0x06, 0x04, 0x02, 0x08, 0x04, 0x07, 0x08, 0x09, 0x0B, 0x06, 0x04, 0x0A, 0x02,
  0x03, 0x05, 0x07, 0x08, 0x07, 0x08, 0x09, 0x0A, 0x05, 0x0C, 0x08, 0x0D, 0x08, 0x0D, 0x0B, 0x06,
  0x04, 0x06, 0x06, 0x04, 0x06, 0x04, 0x0E, 0x02, 0x08, 0x0D, 0x0F, 0x06, 0x10, 0x06, 0x03, 0x01,
  0x01, 0x03, 0x03, 0x07, 0x03, 0x07, 0x05, 0x08, 0x02, 0x07, 0x04, 0x06, 0x04, 0x06, 0x06, 0x04,
  0x03, 0x07, 0x05, 0x08, 0x05, 0x08, 0x0C, 0x0D, 0x07, 0x09, 0x08, 0x0B, 0x08, 0x0B, 0x0D, 0x06,
  0x02, 0x07, 0x04, 0x06, 0x07, 0x09, 0x08, 0x0B, 0x04, 0x08, 0x02, 0x04, 0x06, 0x0B, 0x04, 0x02,
  0x04, 0x06, 0x06, 0x04, 0x08, 0x10, 0x0D, 0x06, 0x06, 0x10, 0x04, 0x02, 0x0F, 0x03, 0x06, 0x01,
  0x02, 0x07, 0x07, 0x09, 0x04, 0x06, 0x08, 0x10, 0x04, 0x08, 0x06, 0x0A, 0x02, 0x04, 0x04, 0x02,
  0x04, 0x06, 0x08, 0x0F, 0x06, 0x04, 0x0D, 0x06, 0x06, 0x0E, 0x10, 0x03, 0x04, 0x02, 0x06, 0x01,
  0x04, 0x08, 0x06, 0x10, 0x06, 0x0F, 0x10, 0x03, 0x06, 0x0D, 0x04, 0x06, 0x04, 0x06, 0x02, 0x01,
  0x02, 0x04, 0x04, 0x02, 0x04, 0x02, 0x11, 0x01, 0x04, 0x11, 0x02, 0x01, 0x02, 0x01, 0x01, 0x00,
];

#[rustfmt::skip]
pub const REGULAR_CELL_DATA: [RegularCellData; 18] = [
  RegularCellData::new(0x00, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x31, [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x42, [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x62, [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x53, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x93, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x64, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0]),
  RegularCellData::new(0x73, [0, 1, 2, 3, 4, 5, 3, 5, 6, 0, 0, 0, 0, 0, 0]),
  RegularCellData::new(0x84, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 0, 0, 0]),
  RegularCellData::new(0x84, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0]),
  RegularCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6]),
  RegularCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 6, 4, 5, 6]),
  RegularCellData::new(0xC4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0]),
  RegularCellData::new(0x95, [0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7, 3, 7, 8]),
  RegularCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 5, 0, 5, 6, 3, 4, 5]),
  RegularCellData::new(0x75, [0, 1, 2, 0, 2, 4, 0, 4, 5, 0, 5, 6, 2, 3, 4]),
  RegularCellData::new(0x75, [0, 1, 2, 0, 2, 6, 2, 3, 5, 2, 5, 6, 3, 4, 5]),
  RegularCellData::new(0x64, [0, 1, 2, 0, 2, 5, 2, 3, 5, 3, 4, 5, 0, 0, 0]),
];

/// Per-case vertex codes: `dir << 12 | slot << 8 | cornerA << 4 | cornerB`.
#[rustfmt::skip]
pub const REGULAR_VERTEX_DATA: [[u16; 12]; 256] = [
  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x00
  [0x5102, 0x3304, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x01
  [0x6201, 0x2315, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x02
  [0x3304, 0x2315, 0x4113, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x03
  [0x4223, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x04
  [0x1326, 0x3304, 0x6201, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x05
  [0x6201, 0x2315, 0x4113, 0x4223, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x06
  [0x3304, 0x2315, 0x4113, 0x4223, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x07
  [0x4113, 0x8337, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x08
  [0x5102, 0x3304, 0x6201, 0x4113, 0x8337, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x09
  [0x2315, 0x8337, 0x4223, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0A
  [0x2315, 0x8337, 0x4223, 0x5102, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0B
  [0x8337, 0x1326, 0x5102, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0C
  [0x1326, 0x3304, 0x6201, 0x4113, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0D
  [0x8337, 0x1326, 0x5102, 0x6201, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0E
  [0x8337, 0x1326, 0x3304, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x0F
  [0x3304, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x10
  [0x1146, 0x2245, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x11
  [0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x12
  [0x5102, 0x1146, 0x2245, 0x2315, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x13
  [0x3304, 0x1146, 0x2245, 0x4223, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x14
  [0x6201, 0x4223, 0x1326, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x15
  [0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x4223, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000], // 0x16
  [0x4113, 0x4223, 0x1326, 0x1146, 0x2245, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x17
  [0x3304, 0x1146, 0x2245, 0x4113, 0x8337, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x18
  [0x4113, 0x8337, 0x4223, 0x1146, 0x2245, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x19
  [0x3304, 0x1146, 0x2245, 0x2315, 0x8337, 0x4223, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1A
  [0x4223, 0x5102, 0x1146, 0x2245, 0x2315, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1B
  [0x3304, 0x1146, 0x2245, 0x8337, 0x1326, 0x5102, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1C
  [0x6201, 0x4113, 0x8337, 0x1326, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1D
  [0x3304, 0x1146, 0x2245, 0x8337, 0x1326, 0x5102, 0x6201, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1E
  [0x8337, 0x1326, 0x1146, 0x2245, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x1F
  [0x2245, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x20
  [0x5102, 0x3304, 0x6201, 0x2245, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x21
  [0x2245, 0x8157, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x22
  [0x4113, 0x5102, 0x3304, 0x2245, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x23
  [0x4223, 0x1326, 0x5102, 0x2245, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x24
  [0x2245, 0x8157, 0x2315, 0x1326, 0x3304, 0x6201, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x25
  [0x4223, 0x1326, 0x5102, 0x2245, 0x8157, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x26
  [0x3304, 0x2245, 0x8157, 0x4113, 0x4223, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x27
  [0x4113, 0x8337, 0x4223, 0x2245, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x28
  [0x5102, 0x3304, 0x6201, 0x4113, 0x8337, 0x4223, 0x2245, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000], // 0x29
  [0x6201, 0x2245, 0x8157, 0x8337, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2A
  [0x4223, 0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2B
  [0x2245, 0x8157, 0x2315, 0x8337, 0x1326, 0x5102, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2C
  [0x2245, 0x8157, 0x2315, 0x1326, 0x3304, 0x6201, 0x4113, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2D
  [0x5102, 0x6201, 0x2245, 0x8157, 0x8337, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2E
  [0x1326, 0x3304, 0x2245, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x2F
  [0x1146, 0x8157, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x30
  [0x1146, 0x8157, 0x2315, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x31
  [0x8157, 0x4113, 0x6201, 0x3304, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x32
  [0x1146, 0x8157, 0x4113, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x33
  [0x4223, 0x1326, 0x5102, 0x1146, 0x8157, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x34
  [0x6201, 0x4223, 0x1326, 0x1146, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x35
  [0x4223, 0x1326, 0x5102, 0x8157, 0x4113, 0x6201, 0x3304, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000], // 0x36
  [0x8157, 0x4113, 0x4223, 0x1326, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x37
  [0x4113, 0x8337, 0x4223, 0x1146, 0x8157, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x38
  [0x4113, 0x8337, 0x4223, 0x1146, 0x8157, 0x2315, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000], // 0x39
  [0x4223, 0x6201, 0x3304, 0x1146, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3A
  [0x1146, 0x8157, 0x8337, 0x4223, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3B
  [0x8337, 0x1326, 0x5102, 0x4113, 0x1146, 0x8157, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3C
  [0x6201, 0x4113, 0x8337, 0x1326, 0x1146, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3D
  [0x8157, 0x8337, 0x1326, 0x5102, 0x6201, 0x3304, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3E
  [0x1146, 0x8157, 0x8337, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x3F
  [0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x40
  [0x5102, 0x3304, 0x6201, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x41
  [0x6201, 0x2315, 0x4113, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x42
  [0x8267, 0x1146, 0x1326, 0x3304, 0x2315, 0x4113, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x43
  [0x8267, 0x1146, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x44
  [0x4223, 0x8267, 0x1146, 0x3304, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x45
  [0x6201, 0x2315, 0x4113, 0x8267, 0x1146, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x46
  [0x3304, 0x2315, 0x4113, 0x4223, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x47
  [0x4113, 0x8337, 0x4223, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x48
  [0x5102, 0x3304, 0x6201, 0x4113, 0x8337, 0x4223, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000], // 0x49
  [0x8267, 0x1146, 0x1326, 0x2315, 0x8337, 0x4223, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4A
  [0x8267, 0x1146, 0x1326, 0x2315, 0x8337, 0x4223, 0x5102, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4B
  [0x5102, 0x4113, 0x8337, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4C
  [0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4D
  [0x5102, 0x6201, 0x2315, 0x8337, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4E
  [0x2315, 0x8337, 0x8267, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x4F
  [0x1326, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x50
  [0x2245, 0x6201, 0x5102, 0x1326, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x51
  [0x6201, 0x2315, 0x4113, 0x1326, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x52
  [0x4113, 0x5102, 0x1326, 0x8267, 0x2245, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x53
  [0x8267, 0x2245, 0x3304, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x54
  [0x8267, 0x2245, 0x6201, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x55
  [0x6201, 0x2315, 0x4113, 0x8267, 0x2245, 0x3304, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000], // 0x56
  [0x8267, 0x2245, 0x2315, 0x4113, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x57
  [0x4113, 0x8337, 0x4223, 0x1326, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x58
  [0x4113, 0x8337, 0x4223, 0x2245, 0x6201, 0x5102, 0x1326, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000], // 0x59
  [0x2315, 0x8337, 0x4223, 0x6201, 0x1326, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5A
  [0x2245, 0x2315, 0x8337, 0x4223, 0x5102, 0x1326, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5B
  [0x5102, 0x4113, 0x8337, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5C
  [0x2245, 0x6201, 0x4113, 0x8337, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5D
  [0x5102, 0x6201, 0x2315, 0x8337, 0x8267, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5E
  [0x8337, 0x8267, 0x2245, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x5F
  [0x2245, 0x8157, 0x2315, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x60
  [0x5102, 0x3304, 0x6201, 0x2245, 0x8157, 0x2315, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000], // 0x61
  [0x8267, 0x1146, 0x1326, 0x2245, 0x8157, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x62
  [0x8267, 0x1146, 0x1326, 0x4113, 0x5102, 0x3304, 0x2245, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000], // 0x63
  [0x2245, 0x8157, 0x2315, 0x8267, 0x1146, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x64
  [0x2245, 0x8157, 0x2315, 0x4223, 0x8267, 0x1146, 0x3304, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000], // 0x65
  [0x2245, 0x8157, 0x4113, 0x6201, 0x8267, 0x1146, 0x5102, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000], // 0x66
  [0x3304, 0x2245, 0x8157, 0x4113, 0x4223, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x67
  [0x4113, 0x8337, 0x4223, 0x2245, 0x8157, 0x2315, 0x8267, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000], // 0x68
  [0x5102, 0x3304, 0x6201, 0x4113, 0x8337, 0x4223, 0x2245, 0x8157, 0x2315, 0x8267, 0x1146, 0x1326], // 0x69
  [0x8267, 0x1146, 0x1326, 0x6201, 0x2245, 0x8157, 0x8337, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000], // 0x6A
  [0x8267, 0x1146, 0x1326, 0x4223, 0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000], // 0x6B
  [0x2245, 0x8157, 0x2315, 0x5102, 0x4113, 0x8337, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000], // 0x6C
  [0x2245, 0x8157, 0x2315, 0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000], // 0x6D
  [0x5102, 0x6201, 0x2245, 0x8157, 0x8337, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x6E
  [0x3304, 0x2245, 0x8157, 0x8337, 0x8267, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x6F
  [0x3304, 0x1326, 0x8267, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x70
  [0x6201, 0x5102, 0x1326, 0x8267, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x71
  [0x4113, 0x6201, 0x3304, 0x1326, 0x8267, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x72
  [0x4113, 0x5102, 0x1326, 0x8267, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x73
  [0x5102, 0x4223, 0x8267, 0x8157, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x74
  [0x4223, 0x8267, 0x8157, 0x2315, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x75
  [0x3304, 0x5102, 0x4223, 0x8267, 0x8157, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x76
  [0x8267, 0x8157, 0x4113, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x77
  [0x4113, 0x8337, 0x4223, 0x3304, 0x1326, 0x8267, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000], // 0x78
  [0x4113, 0x8337, 0x4223, 0x6201, 0x5102, 0x1326, 0x8267, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000], // 0x79
  [0x8157, 0x8337, 0x4223, 0x6201, 0x3304, 0x1326, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7A
  [0x8157, 0x8337, 0x4223, 0x5102, 0x1326, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7B
  [0x2315, 0x3304, 0x5102, 0x4113, 0x8337, 0x8267, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7C
  [0x6201, 0x4113, 0x8337, 0x8267, 0x8157, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7D
  [0x6201, 0x3304, 0x5102, 0x8267, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7E
  [0x8267, 0x8157, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x7F
  [0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x80
  [0x5102, 0x3304, 0x6201, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x81
  [0x6201, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x82
  [0x8337, 0x8157, 0x8267, 0x3304, 0x2315, 0x4113, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x83
  [0x4223, 0x1326, 0x5102, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x84
  [0x8337, 0x8157, 0x8267, 0x1326, 0x3304, 0x6201, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x85
  [0x6201, 0x2315, 0x4113, 0x4223, 0x1326, 0x5102, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000], // 0x86
  [0x8337, 0x8157, 0x8267, 0x3304, 0x2315, 0x4113, 0x4223, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000], // 0x87
  [0x8157, 0x8267, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x88
  [0x5102, 0x3304, 0x6201, 0x8157, 0x8267, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x89
  [0x4223, 0x6201, 0x2315, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8A
  [0x4223, 0x5102, 0x3304, 0x2315, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8B
  [0x4113, 0x8157, 0x8267, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8C
  [0x6201, 0x4113, 0x8157, 0x8267, 0x1326, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8D
  [0x5102, 0x6201, 0x2315, 0x8157, 0x8267, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8E
  [0x3304, 0x2315, 0x8157, 0x8267, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x8F
  [0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x90
  [0x8337, 0x8157, 0x8267, 0x1146, 0x2245, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x91
  [0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000], // 0x92
  [0x8337, 0x8157, 0x8267, 0x5102, 0x1146, 0x2245, 0x2315, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000], // 0x93
  [0x3304, 0x1146, 0x2245, 0x4223, 0x1326, 0x5102, 0x8337, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000], // 0x94
  [0x8337, 0x8157, 0x8267, 0x6201, 0x4223, 0x1326, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000], // 0x95
  [0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x4223, 0x1326, 0x5102, 0x8337, 0x8157, 0x8267], // 0x96
  [0x8337, 0x8157, 0x8267, 0x4113, 0x4223, 0x1326, 0x1146, 0x2245, 0x2315, 0x0000, 0x0000, 0x0000], // 0x97
  [0x3304, 0x1146, 0x2245, 0x8157, 0x8267, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x98
  [0x1146, 0x2245, 0x6201, 0x5102, 0x8157, 0x8267, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000], // 0x99
  [0x3304, 0x1146, 0x2245, 0x4223, 0x6201, 0x2315, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000], // 0x9A
  [0x4223, 0x5102, 0x1146, 0x2245, 0x2315, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x9B
  [0x3304, 0x1146, 0x2245, 0x4113, 0x8157, 0x8267, 0x1326, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000], // 0x9C
  [0x6201, 0x4113, 0x8157, 0x8267, 0x1326, 0x1146, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x9D
  [0x3304, 0x1146, 0x2245, 0x5102, 0x6201, 0x2315, 0x8157, 0x8267, 0x1326, 0x0000, 0x0000, 0x0000], // 0x9E
  [0x1326, 0x1146, 0x2245, 0x2315, 0x8157, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0x9F
  [0x8267, 0x8337, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA0
  [0x5102, 0x3304, 0x6201, 0x8267, 0x8337, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA1
  [0x2245, 0x8267, 0x8337, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA2
  [0x4113, 0x5102, 0x3304, 0x2245, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA3
  [0x4223, 0x1326, 0x5102, 0x8267, 0x8337, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA4
  [0x1326, 0x3304, 0x6201, 0x4223, 0x8267, 0x8337, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA5
  [0x4223, 0x1326, 0x5102, 0x2245, 0x8267, 0x8337, 0x4113, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA6
  [0x3304, 0x2245, 0x8267, 0x8337, 0x4113, 0x4223, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA7
  [0x8267, 0x4223, 0x4113, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA8
  [0x5102, 0x3304, 0x6201, 0x8267, 0x4223, 0x4113, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000], // 0xA9
  [0x2245, 0x8267, 0x4223, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAA
  [0x8267, 0x4223, 0x5102, 0x3304, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAB
  [0x5102, 0x4113, 0x2315, 0x2245, 0x8267, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAC
  [0x8267, 0x1326, 0x3304, 0x6201, 0x4113, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAD
  [0x2245, 0x8267, 0x1326, 0x5102, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAE
  [0x8267, 0x1326, 0x3304, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xAF
  [0x2315, 0x3304, 0x1146, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB0
  [0x6201, 0x5102, 0x1146, 0x8267, 0x8337, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB1
  [0x4113, 0x6201, 0x3304, 0x1146, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB2
  [0x5102, 0x1146, 0x8267, 0x8337, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB3
  [0x4223, 0x1326, 0x5102, 0x2315, 0x3304, 0x1146, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB4
  [0x8337, 0x2315, 0x6201, 0x4223, 0x1326, 0x1146, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB5
  [0x4223, 0x1326, 0x5102, 0x4113, 0x6201, 0x3304, 0x1146, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000], // 0xB6
  [0x4113, 0x4223, 0x1326, 0x1146, 0x8267, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB7
  [0x2315, 0x3304, 0x1146, 0x8267, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB8
  [0x5102, 0x1146, 0x8267, 0x4223, 0x4113, 0x2315, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xB9
  [0x4223, 0x6201, 0x3304, 0x1146, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBA
  [0x1146, 0x8267, 0x4223, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBB
  [0x8267, 0x1326, 0x5102, 0x4113, 0x2315, 0x3304, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBC
  [0x4113, 0x2315, 0x6201, 0x1326, 0x1146, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBD
  [0x8267, 0x1326, 0x5102, 0x6201, 0x3304, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBE
  [0x1326, 0x1146, 0x8267, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xBF
  [0x8157, 0x1146, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC0
  [0x5102, 0x3304, 0x6201, 0x8157, 0x1146, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC1
  [0x6201, 0x2315, 0x4113, 0x8157, 0x1146, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC2
  [0x3304, 0x2315, 0x4113, 0x5102, 0x8157, 0x1146, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC3
  [0x1146, 0x5102, 0x4223, 0x8337, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC4
  [0x6201, 0x4223, 0x8337, 0x8157, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC5
  [0x6201, 0x2315, 0x4113, 0x1146, 0x5102, 0x4223, 0x8337, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC6
  [0x8157, 0x1146, 0x3304, 0x2315, 0x4113, 0x4223, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC7
  [0x8157, 0x1146, 0x1326, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC8
  [0x5102, 0x3304, 0x6201, 0x8157, 0x1146, 0x1326, 0x4223, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000], // 0xC9
  [0x4223, 0x6201, 0x2315, 0x8157, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCA
  [0x4223, 0x5102, 0x3304, 0x2315, 0x8157, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCB
  [0x8157, 0x1146, 0x5102, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCC
  [0x8157, 0x1146, 0x3304, 0x6201, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCD
  [0x1146, 0x5102, 0x6201, 0x2315, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCE
  [0x8157, 0x1146, 0x3304, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xCF
  [0x1326, 0x8337, 0x8157, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD0
  [0x6201, 0x5102, 0x1326, 0x8337, 0x8157, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD1
  [0x6201, 0x2315, 0x4113, 0x1326, 0x8337, 0x8157, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD2
  [0x2245, 0x2315, 0x4113, 0x5102, 0x1326, 0x8337, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD3
  [0x5102, 0x4223, 0x8337, 0x8157, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD4
  [0x6201, 0x4223, 0x8337, 0x8157, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD5
  [0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x8337, 0x8157, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000], // 0xD6
  [0x2245, 0x2315, 0x4113, 0x4223, 0x8337, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD7
  [0x2245, 0x3304, 0x1326, 0x4223, 0x4113, 0x8157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD8
  [0x1326, 0x4223, 0x4113, 0x8157, 0x2245, 0x6201, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xD9
  [0x3304, 0x1326, 0x4223, 0x6201, 0x2315, 0x8157, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDA
  [0x5102, 0x1326, 0x4223, 0x2315, 0x8157, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDB
  [0x4113, 0x8157, 0x2245, 0x3304, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDC
  [0x8157, 0x2245, 0x6201, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDD
  [0x5102, 0x6201, 0x2315, 0x8157, 0x2245, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDE
  [0x2315, 0x8157, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xDF
  [0x8337, 0x2315, 0x2245, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE0
  [0x5102, 0x3304, 0x6201, 0x8337, 0x2315, 0x2245, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE1
  [0x4113, 0x6201, 0x2245, 0x1146, 0x1326, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE2
  [0x1326, 0x8337, 0x4113, 0x5102, 0x3304, 0x2245, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE3
  [0x5102, 0x4223, 0x8337, 0x2315, 0x2245, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE4
  [0x1146, 0x3304, 0x6201, 0x4223, 0x8337, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE5
  [0x6201, 0x2245, 0x1146, 0x5102, 0x4223, 0x8337, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE6
  [0x4223, 0x8337, 0x4113, 0x2245, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE7
  [0x4223, 0x4113, 0x2315, 0x2245, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xE8
  [0x5102, 0x3304, 0x6201, 0x4223, 0x4113, 0x2315, 0x2245, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000], // 0xE9
  [0x6201, 0x2245, 0x1146, 0x1326, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xEA
  [0x4223, 0x5102, 0x3304, 0x2245, 0x1146, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xEB
  [0x5102, 0x4113, 0x2315, 0x2245, 0x1146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xEC
  [0x1146, 0x3304, 0x6201, 0x4113, 0x2315, 0x2245, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xED
  [0x2245, 0x1146, 0x5102, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xEE
  [0x2245, 0x1146, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xEF
  [0x1326, 0x8337, 0x2315, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF0
  [0x8337, 0x2315, 0x6201, 0x5102, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF1
  [0x1326, 0x8337, 0x4113, 0x6201, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF2
  [0x1326, 0x8337, 0x4113, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF3
  [0x2315, 0x3304, 0x5102, 0x4223, 0x8337, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF4
  [0x8337, 0x2315, 0x6201, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF5
  [0x5102, 0x4223, 0x8337, 0x4113, 0x6201, 0x3304, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF6
  [0x4223, 0x8337, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF7
  [0x3304, 0x1326, 0x4223, 0x4113, 0x2315, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF8
  [0x4223, 0x4113, 0x2315, 0x6201, 0x5102, 0x1326, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xF9
  [0x3304, 0x1326, 0x4223, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFA
  [0x5102, 0x1326, 0x4223, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFB
  [0x2315, 0x3304, 0x5102, 0x4113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFC
  [0x4113, 0x2315, 0x6201, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFD
  [0x6201, 0x3304, 0x5102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFE
  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // 0xFF
];
