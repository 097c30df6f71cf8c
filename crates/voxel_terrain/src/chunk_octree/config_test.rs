use glam::IVec3;

use super::*;

/// Threshold = width * scale * factor; default factor is 2.
#[test]
fn test_threshold_scales_with_width() {
  let config = ChunkOctreeConfig::default();
  let d1 = OctreeCube::new(IVec3::ZERO, 1);
  let d3 = OctreeCube::new(IVec3::ZERO, 3);
  assert_eq!(config.threshold(&d1), 64.0, "32 wide * 2");
  assert_eq!(config.threshold(&d3), 256.0, "128 wide * 2");

  let scaled = ChunkOctreeConfig::new().with_world_scale(0.5);
  assert_eq!(scaled.threshold(&d1), 32.0);
}

#[test]
fn test_depth_zero_is_always_leaf() {
  let config = ChunkOctreeConfig::default();
  let cube = OctreeCube::new(IVec3::splat(8), 0);
  assert!(config.is_leaf(&cube, DVec3::splat(8.0)), "Camera inside a depth-0 node");
}

#[test]
fn test_split_when_camera_is_close() {
  let config = ChunkOctreeConfig::default();
  let cube = OctreeCube::new(IVec3::ZERO, 2);
  assert!(!config.is_leaf(&cube, DVec3::new(100.0, 0.0, 0.0)), "100 <= 128 splits");
  assert!(config.is_leaf(&cube, DVec3::new(129.0, 0.0, 0.0)), "129 > 128 stays whole");
}

#[test]
fn test_high_resolution_distance_extends_detail() {
  let config = ChunkOctreeConfig::new().with_high_resolution_distance(50.0);
  let cube = OctreeCube::new(IVec3::ZERO, 2);
  assert!(
    !config.is_leaf(&cube, DVec3::new(150.0, 0.0, 0.0)),
    "150 - 50 = 100 <= 128 splits"
  );
  assert_eq!(config.distance(&cube, DVec3::new(30.0, 0.0, 0.0)), -20.0);
}

#[test]
fn test_validate() {
  assert!(ChunkOctreeConfig::default().validate().is_ok());
  assert!(ChunkOctreeConfig::new().with_world_scale(0.0).validate().is_err());
  assert!(ChunkOctreeConfig::new()
    .with_lod_distance_factor(-1.0)
    .validate()
    .is_err());
  assert!(ChunkOctreeConfig::new()
    .with_high_resolution_distance(f64::NAN)
    .validate()
    .is_err());
}
