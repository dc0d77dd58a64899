mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mri_phantom::mask::{build_mask, embed_at, MaskConfig, OddPreference};
use mri_phantom::placement::{circular_positions, Position};
use mri_phantom::raster::CanvasShape;
use mri_phantom::stencil::{create_stencil, Morphology};

const STENCIL_RADII: [usize; 4] = [4, 8, 16, 32];
const COMPARTMENT_COUNTS: [usize; 4] = [1, 3, 8, 16];

fn embed_benches(c: &mut Criterion) {
    let shape = CanvasShape::new(256, 256);
    let center = shape.center();

    let mut group = c.benchmark_group("mask/embed");
    for &radius in &STENCIL_RADII {
        let stencil = create_stencil(Morphology::Disk, radius);
        group.throughput(common::elements_throughput(shape.len()));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let layer = embed_at(&stencil, center, shape, OddPreference::Post)
                    .expect("center placement fits");
                black_box(layer.as_slice().len());
            });
        });
    }
    group.finish();
}

fn build_mask_benches(c: &mut Criterion) {
    let shape = CanvasShape::new(256, 256);
    let stencil = create_stencil(Morphology::Disk, 12);

    let mut group = c.benchmark_group("mask/build_mask");
    for &count in &COMPARTMENT_COUNTS {
        let positions: Vec<Position> =
            circular_positions(count, shape, 80).expect("positive count");
        let config = MaskConfig::new(shape);
        group.throughput(common::elements_throughput(shape.len() * count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let mask = build_mask(&stencil, &positions, &config).expect("no clipping");
                black_box(mask.as_slice().len());
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = embed_benches, build_mask_benches
}
criterion_main!(benches);
