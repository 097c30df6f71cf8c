//! Shared octree geometry.
//!
//! # Depth Convention
//!
//! Depth 0 = finest detail (16-voxel cubes), higher depth = coarser.
//!
//! ```text
//! Width = 16 * 2^depth
//! ```
//!
//! Both trees are rooted at the origin, so a world of depth D covers
//! `[-8 * 2^D, 8 * 2^D)` on every axis.

pub mod node;

pub use node::OctreeCube;
