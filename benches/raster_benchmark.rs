#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line and triangle rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fastheap::prelude::*;
use fastheap::raster::{stage_line, stage_triangle};

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_line");

    for length in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let end = Pixel::new(length, length / 3);
            b.iter(|| stage_line(black_box(Pixel::new(0, 0)), black_box(end)));
        });
    }

    group.finish();
}

fn triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_triangle");

    for size in [16, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                stage_triangle(
                    black_box(Pixel::new(0, 0)),
                    black_box(Pixel::new(size, size / 4)),
                    black_box(Pixel::new(size / 3, size)),
                )
            });
        });
    }

    group.finish();
}

fn brush_line_benchmark(c: &mut Criterion) {
    let mut canvas = Canvas::new(800, 600).expect("valid dimensions");
    let brush = Brush::new(BrushShape::Circle, 7, Rgba::BLACK);

    c.bench_function("brush_line_800x600", |b| {
        let (start, end) = (Pixel::new(-10, 20), Pixel::new(810, 580));
        b.iter(|| canvas.brush_line(black_box(start), black_box(end), &brush));
    });
}

criterion_group!(benches, line_benchmark, triangle_benchmark, brush_line_benchmark);
criterion_main!(benches);
