//! Procedural default fields.
//!
//! A clean value-octree leaf owns no storage and answers every read from a
//! [`FieldGenerator`]. The built-in generators are deterministic analytic
//! shapes, handy for verifying chunk seams without noise in the way.

use glam::{DVec3, IVec3};

use crate::types::{density, Density, Rgba8};

/// Default density and color for every lattice point of the world.
///
/// Called concurrently from meshing jobs, so implementations must be pure.
pub trait FieldGenerator: Send + Sync {
  /// Density at a global lattice position.
  fn default_value(&self, position: IVec3) -> Density;

  /// Color at a global lattice position.
  fn default_color(&self, position: IVec3) -> Rgba8;
}

impl<G: FieldGenerator + ?Sized> FieldGenerator for Box<G> {
  fn default_value(&self, position: IVec3) -> Density {
    (**self).default_value(position)
  }

  fn default_color(&self, position: IVec3) -> Rgba8 {
    (**self).default_color(position)
  }
}

const STONE: Rgba8 = [128, 128, 128, 255];

#[inline]
fn to_world(position: IVec3) -> DVec3 {
  position.as_dvec3()
}

/// Uniform field. Every read returns the same density.
#[derive(Clone, Debug)]
pub struct ConstantGenerator {
  pub value: Density,
  pub color: Rgba8,
}

impl ConstantGenerator {
  pub fn new(value: Density) -> Self {
    Self {
      value,
      color: STONE,
    }
  }
}

impl FieldGenerator for ConstantGenerator {
  fn default_value(&self, _position: IVec3) -> Density {
    self.value
  }

  fn default_color(&self, _position: IVec3) -> Rgba8 {
    self.color
  }
}

/// Horizontal ground plane. Solid below `height`.
#[derive(Clone, Debug)]
pub struct FlatGenerator {
  pub height: f64,
  pub color: Rgba8,
}

impl Default for FlatGenerator {
  fn default() -> Self {
    Self {
      height: 0.5,
      color: [96, 160, 64, 255],
    }
  }
}

impl FlatGenerator {
  /// Ground surface at `height` voxels.
  pub fn new(height: f64) -> Self {
    Self {
      height,
      ..Self::default()
    }
  }

  pub fn with_color(mut self, color: Rgba8) -> Self {
    self.color = color;
    self
  }
}

impl FieldGenerator for FlatGenerator {
  fn default_value(&self, position: IVec3) -> Density {
    density::from_distance((position.y as f64 - self.height) as f32)
  }

  fn default_color(&self, _position: IVec3) -> Rgba8 {
    self.color
  }
}

/// Plane tilted around Z through `(0, height, 0)`.
///
/// Crosses many chunk boundaries at a predictable angle.
/// Distance: `(y - height) * cos(angle) - x * sin(angle)`
#[derive(Clone, Debug)]
pub struct TiltedPlaneGenerator {
  pub height: f64,
  /// Tilt angle in radians (default: π/4 = 45°)
  pub angle: f64,
  pub color: Rgba8,
}

impl Default for TiltedPlaneGenerator {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f64::consts::FRAC_PI_4,
      color: STONE,
    }
  }
}

impl TiltedPlaneGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f64) -> Self {
    self.height = height;
    self
  }

  /// Tilt of the plane around the Z axis.
  pub fn with_angle_degrees(mut self, degrees: f64) -> Self {
    self.angle = degrees.to_radians();
    self
  }
}

impl FieldGenerator for TiltedPlaneGenerator {
  fn default_value(&self, position: IVec3) -> Density {
    let p = to_world(position);
    let distance = (p.y - self.height) * self.angle.cos() - p.x * self.angle.sin();
    density::from_distance(distance as f32)
  }

  fn default_color(&self, _position: IVec3) -> Rgba8 {
    self.color
  }
}

/// Solid sphere.
#[derive(Clone, Debug)]
pub struct SphereGenerator {
  pub center: DVec3,
  pub radius: f64,
  pub color: Rgba8,
}

impl SphereGenerator {
  /// Sphere of `radius` voxels at the origin.
  pub fn new(radius: f64) -> Self {
    Self {
      center: DVec3::ZERO,
      radius,
      color: [200, 120, 80, 255],
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }

  pub fn with_color(mut self, color: Rgba8) -> Self {
    self.color = color;
    self
  }
}

impl FieldGenerator for SphereGenerator {
  fn default_value(&self, position: IVec3) -> Density {
    let distance = to_world(position).distance(self.center) - self.radius;
    density::from_distance(distance as f32)
  }

  fn default_color(&self, _position: IVec3) -> Rgba8 {
    self.color
  }
}

/// Solid axis-aligned box.
#[derive(Clone, Debug)]
pub struct BoxGenerator {
  pub center: DVec3,
  pub half_extents: DVec3,
  pub color: Rgba8,
}

impl BoxGenerator {
  /// Box at the origin.
  pub fn new(half_extents: DVec3) -> Self {
    Self {
      center: DVec3::ZERO,
      half_extents,
      color: STONE,
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }
}

impl FieldGenerator for BoxGenerator {
  fn default_value(&self, position: IVec3) -> Density {
    let d = (to_world(position) - self.center).abs() - self.half_extents;
    let outside = d.max(DVec3::ZERO).length();
    let inside = d.max_element().min(0.0);
    density::from_distance((outside + inside) as f32)
  }

  fn default_color(&self, _position: IVec3) -> Rgba8 {
    self.color
  }
}
