// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use vitrine_spiral::SpiralParams;

fn bench_place(c: &mut Criterion) {
    let params = SpiralParams::new(Point::new(-512.0, 0.0), 358.4);
    let mut group = c.benchmark_group("spiral_place");
    for &n in &[1_usize, 14, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(params.place(black_box(n))));
        });
    }
    group.finish();
}

fn bench_slot(c: &mut Criterion) {
    let params = SpiralParams::new(Point::ZERO, 400.0);
    c.bench_function("spiral_single_slot", |b| {
        b.iter(|| black_box(params.slot(black_box(37), black_box(64))));
    });
}

criterion_group!(benches, bench_place, bench_slot);
criterion_main!(benches);
