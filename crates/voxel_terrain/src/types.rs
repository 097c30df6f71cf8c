//! Core data types shared by storage, polygonization and assembly.

/// Signed density sample.
/// Negative = inside/solid, non-negative = outside/air.
pub type Density = i8;

/// 8-bit RGBA color stored per lattice point.
pub type Rgba8 = [u8; 4];

/// Density conversion utilities for quantized storage.
///
/// Maps a float signed distance (in voxels) to i8 [-127, +127] with a ±10
/// voxel range. Precision: ~0.079 voxels per level.
pub mod density {
  use super::Density;

  /// Distance range in voxels (values outside this clamp to ±127).
  pub const RANGE: f32 = 10.0;

  /// Scale factor: 127 / RANGE = 12.7
  pub const SCALE: f32 = 127.0 / RANGE;

  /// Convert a float signed distance to quantized storage.
  #[inline(always)]
  pub fn from_distance(distance: f32) -> Density {
    (distance * SCALE).clamp(-127.0, 127.0).round() as Density
  }

  /// Clamp an integer density into the representable range.
  ///
  /// `-128` is folded to `-127` so the range stays symmetric.
  #[inline(always)]
  pub fn clamp(value: i32) -> Density {
    let max = crate::constants::MAX_DENSITY as i32;
    value.clamp(-max, max) as Density
  }
}

// =============================================================================
// Faces
// =============================================================================

/// One of the six chunk faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
  XMin = 0,
  XMax = 1,
  YMin = 2,
  YMax = 3,
  ZMin = 4,
  ZMax = 5,
}

impl Face {
  pub const ALL: [Face; 6] = [
    Face::XMin,
    Face::XMax,
    Face::YMin,
    Face::YMax,
    Face::ZMin,
    Face::ZMax,
  ];

  /// Axis the face is perpendicular to (0 = X, 1 = Y, 2 = Z).
  #[inline]
  pub const fn axis(self) -> usize {
    self as usize >> 1
  }

  /// True for the face on the positive end of its axis.
  #[inline]
  pub const fn is_max(self) -> bool {
    self as u8 & 1 == 1
  }

  /// Outward unit normal in lattice space.
  pub fn outward(self) -> glam::IVec3 {
    let sign = if self.is_max() { 1 } else { -1 };
    let mut n = glam::IVec3::ZERO;
    n[self.axis()] = sign;
    n
  }

  #[inline]
  pub const fn bit(self) -> u8 {
    1 << self as u8
  }
}

/// Bitset of faces, one bit per [`Face`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceFlags(pub u8);

impl FaceFlags {
  pub const NONE: FaceFlags = FaceFlags(0);
  pub const ALL: FaceFlags = FaceFlags(0x3F);

  #[inline]
  pub const fn contains(self, face: Face) -> bool {
    self.0 & face.bit() != 0
  }

  #[inline]
  pub fn insert(&mut self, face: Face) {
    self.0 |= face.bit();
  }

  pub fn with(mut self, face: Face) -> Self {
    self.insert(face);
    self
  }

  #[inline]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Iterate the faces present in the set.
  pub fn iter(self) -> impl Iterator<Item = Face> {
    Face::ALL.into_iter().filter(move |f| self.contains(*f))
  }
}

// =============================================================================
// Mesh output
// =============================================================================

/// Output vertex with all render attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Vertex position in chunk-local voxel units [0, 16 << depth].
  pub position: [f32; 3],

  /// Surface normal (unit vector, pointing toward air).
  pub normal: [f32; 3],

  /// Unit tangent orthogonal to the normal.
  pub tangent: [f32; 3],

  /// Color sampled on the solid side of the surface.
  pub color: Rgba8,
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
      tangent: [1.0, 0.0, 0.0],
      color: [255; 4],
    }
  }
}

/// Chunk-local bounds of a mesh.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Inverted box; the first encapsulated point replaces both corners.
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// False until a point has been encapsulated.
  pub fn is_valid(&self) -> bool {
    (0..3).all(|i| self.min[i] <= self.max[i])
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Final mesh of one chunk, ready for a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Renderable vertices.
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 per triangle, counter-clockwise seen from air).
  pub indices: Vec<u32>,

  /// Bounds of `vertices`, empty for an empty mesh.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// True for chunks the surface does not cross.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Configuration for mesh assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
  /// Width of the transition strip as a fraction of one chunk cell.
  /// Regular vertices near a finer face are pushed inward by up to this much.
  pub transition_width: f32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      transition_width: 0.5,
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the transition strip width, in cells.
  pub fn with_transition_width(mut self, width: f32) -> Self {
    self.transition_width = width;
    self
  }

  /// The width must lie strictly between 0 and 1.
  pub fn validate(&self) -> crate::Result<()> {
    if !(self.transition_width > 0.0 && self.transition_width < 1.0) {
      return Err(crate::TerrainError::InvalidConfig {
        field: "transition_width",
        reason: format!("must lie in (0, 1), got {}", self.transition_width),
      });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
