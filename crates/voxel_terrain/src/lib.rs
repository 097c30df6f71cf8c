//! voxel_terrain - Engine independent voxel terrain storage and meshing
//!
//! A sparse octree stores a signed density and color field over a procedural
//! default, and a Transvoxel mesher turns 16³-cell chunks of it into
//! crack-free triangle meshes across levels of detail.
//!
//! # Features
//!
//! - **Value octree**: lazy dense leaves, safe to read from meshing jobs
//!   while the main thread edits
//! - **Chunk octree**: camera-driven LOD, finer-neighbor detection per face
//! - **Regular and transition cells**: case-table triangulation with vertex
//!   reuse, seam stitching between LODs
//! - **Async meshing**: rayon jobs with main-thread completion
//!
//! # Example
//!
//! ```ignore
//! use voxel_terrain::{FlatGenerator, MeshStore, VoxelWorld, WorldConfig};
//!
//! let mut world = VoxelWorld::new(WorldConfig::default(), FlatGenerator::new(0.5))?;
//! let mut store = MeshStore::default();
//!
//! world.update_camera_position(glam::DVec3::ZERO);
//! world.set_value(glam::IVec3::new(3, 1, 3), -100)?;
//! world.flush(&mut store);
//!
//! for (key, mesh) in &store.meshes {
//!   println!("{:?}: {} triangles", key, mesh.mesh.triangle_count());
//! }
//! ```

pub mod constants;
pub mod error;
pub mod generator;
pub mod types;

pub use error::{Result, TerrainError};
pub use generator::{
  BoxGenerator, ConstantGenerator, FieldGenerator, FlatGenerator, SphereGenerator,
  TiltedPlaneGenerator,
};
pub use types::{density, Density, Face, FaceFlags, MeshConfig, MeshOutput, MinMaxAABB, Rgba8, Vertex};

// Transvoxel case tables
pub mod tables;

// Octree cube geometry shared by both trees
pub mod octree;
pub use octree::OctreeCube;

// Density storage
pub mod value_octree;
pub use value_octree::{SavedLeaf, ValueOctree};

// LOD chunk selection
pub mod chunk_octree;
pub use chunk_octree::{Chunk, ChunkKey, ChunkOctree, ChunkOctreeConfig};

// Per-job sampling window and vertex caches
pub mod sampling;

// Regular and transition cell triangulation
pub mod polygonizer;

// Merge, translate and shade one chunk
pub mod assembler;
pub use assembler::{mesh_chunk, ChunkMesh};

// Background meshing jobs
pub mod task_queue;
pub use task_queue::{MeshCompletion, MeshRequest, MeshingStage};

// World facade
pub mod world;
pub use world::{MeshSink, MeshStore, VoxelWorld, WorldConfig, WorldId};
