use density::*;

use super::*;

// Density conversion tests
#[test]
fn test_from_distance_zero_is_surface() {
  assert_eq!(from_distance(0.0), 0);
}

#[test]
fn test_from_distance_rounds_to_nearest_level() {
  assert_eq!(from_distance(-3.5), -44, "-3.5 * 12.7 = -44.45");
  assert_eq!(from_distance(1.0), 13, "1.0 * 12.7 = 12.7");
}

#[test]
fn test_from_distance_keeps_sign_near_surface() {
  assert!(from_distance(-0.05) < 0, "Slightly inside stays solid");
  assert!(from_distance(0.05) > 0, "Slightly outside stays air");
}

#[test]
fn test_clamping() {
  assert_eq!(from_distance(100.0), 127);
  assert_eq!(from_distance(-100.0), -127);
  assert_eq!(clamp(-128), -127, "-128 must fold into the symmetric range");
  assert_eq!(clamp(500), 127);
  assert_eq!(clamp(-3), -3);
}

// Face tests
#[test]
fn test_face_axis_and_side() {
  assert_eq!(Face::XMin.axis(), 0);
  assert_eq!(Face::YMax.axis(), 1);
  assert_eq!(Face::ZMax.axis(), 2);
  assert!(!Face::ZMin.is_max());
  assert!(Face::XMax.is_max());
  assert_eq!(Face::YMin.outward(), glam::IVec3::new(0, -1, 0));
  assert_eq!(Face::ZMax.outward(), glam::IVec3::new(0, 0, 1));
}

#[test]
fn test_face_flags() {
  let flags = FaceFlags::NONE.with(Face::XMax).with(Face::ZMin);
  assert!(flags.contains(Face::XMax));
  assert!(flags.contains(Face::ZMin));
  assert!(!flags.contains(Face::XMin));
  assert_eq!(
    flags.iter().collect::<Vec<_>>(),
    vec![Face::XMax, Face::ZMin],
    "Iteration should follow face order"
  );
  assert!(FaceFlags::NONE.is_empty());
}

// Mesh output tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_mesh_output_counts() {
  let mut output = MeshOutput::new();
  assert!(output.is_empty());
  output.vertices.extend([Vertex::default(); 3]);
  output.indices.extend_from_slice(&[0, 1, 2]);
  assert_eq!(output.triangle_count(), 1);
  assert!(!output.is_empty());
  assert!(!output.bounds.is_valid(), "Bounds start empty");
}

#[test]
fn test_mesh_config_validation() {
  assert!(MeshConfig::default().validate().is_ok());
  assert!(MeshConfig::new().with_transition_width(0.25).validate().is_ok());
  assert!(
    MeshConfig::new().with_transition_width(0.0).validate().is_err(),
    "Zero width leaves no room for transition cells"
  );
  assert!(MeshConfig::new().with_transition_width(1.5).validate().is_err());
}
