// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `thecolor_color`.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use thecolor_color::Color;

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse/rrggbb", |b| {
        b.iter(|| black_box("#009688").parse::<Color>())
    });

    group.bench_function("parse/aarrggbb", |b| {
        b.iter(|| black_box("80FF5722").parse::<Color>())
    });

    group.bench_function("is_dark", |b| {
        let color = Color::from_rgb(0x3F, 0x51, 0xB5);
        b.iter(|| black_box(color).is_dark())
    });

    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
