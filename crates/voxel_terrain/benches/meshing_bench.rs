//! Chunk meshing and value octree read benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{DVec3, IVec3};
use voxel_terrain::{
  mesh_chunk, ChunkKey, Face, FaceFlags, MeshConfig, SphereGenerator, ValueOctree,
};

fn sphere_octree() -> ValueOctree<SphereGenerator> {
  let generator = SphereGenerator::new(24.0).with_center(DVec3::new(0.5, 0.5, 0.5));
  ValueOctree::new(3, generator).expect("valid depth")
}

/// Regular cells only, at the finest and a coarser depth.
fn bench_regular_chunk(c: &mut Criterion) {
  let octree = sphere_octree();
  let config = MeshConfig::default();
  let mut group = c.benchmark_group("mesh_chunk (sphere r=24, regular)");

  for depth in [0u32, 1, 2] {
    let size = 16 << depth;
    let key = ChunkKey::new(IVec3::new(0, 0, -size), depth);
    group.bench_with_input(BenchmarkId::from_parameter(depth), &key, |b, &key| {
      b.iter(|| black_box(mesh_chunk(&octree, black_box(key), FaceFlags::NONE, &config)))
    });
  }
  group.finish();
}

/// Same chunk with one and three finer faces.
fn bench_transition_chunk(c: &mut Criterion) {
  let octree = sphere_octree();
  let config = MeshConfig::default();
  let key = ChunkKey::new(IVec3::new(0, 0, -32), 1);
  let mut group = c.benchmark_group("mesh_chunk (sphere r=24, transitions)");

  let one = FaceFlags::NONE.with(Face::XMin);
  let three = one.with(Face::YMin).with(Face::ZMax);
  for (name, finer) in [("1 face", one), ("3 faces", three)] {
    group.bench_with_input(BenchmarkId::from_parameter(name), &finer, |b, &finer| {
      b.iter(|| black_box(mesh_chunk(&octree, key, black_box(finer), &config)))
    });
  }
  group.finish();
}

/// Clean leaves read the generator, dirty ones the dense block.
fn bench_octree_reads(c: &mut Criterion) {
  let clean = sphere_octree();
  let dirty = sphere_octree();
  for z in 0..16 {
    for x in 0..16 {
      dirty.set_value(IVec3::new(x, 0, z), -50).expect("inside world");
    }
  }

  let mut group = c.benchmark_group("ValueOctree::get_value (16³ leaf)");
  for (name, octree) in [("clean", &clean), ("dirty", &dirty)] {
    group.bench_function(name, |b| {
      b.iter(|| {
        let mut sum = 0i32;
        for z in 0..16 {
          for y in 0..16 {
            for x in 0..16 {
              sum += octree.get_value(IVec3::new(x, y, z)) as i32;
            }
          }
        }
        black_box(sum)
      })
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_regular_chunk,
  bench_transition_chunk,
  bench_octree_reads
);
criterion_main!(benches);
