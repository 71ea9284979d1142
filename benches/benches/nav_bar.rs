// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `thecolor_nav_bar`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use thecolor_color::Color;
use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController, NavBarDefaults};

fn appearance(i: u32) -> NavBarAppearance {
    NavBarAppearance::for_surface(Color::from_rgb(
        (i * 37) as u8,
        (i * 11) as u8,
        (i * 5) as u8,
    ))
}

/// The screen tree of the app: home with a settings dialog, and a color
/// center with a nested dialog of its own.
fn app_tree() -> (NavBarAppearanceController, Vec<NavBarAppearanceController>) {
    let root = NavBarAppearanceController::new();
    let home = root.branch("home");
    let settings = home.branch("settings");
    let color_center = home.branch("color center");
    let dialog = color_center.branch("dialog");
    let nodes = vec![home, settings, color_center, dialog];
    for (i, node) in nodes.iter().enumerate() {
        node.push(appearance(i as u32));
        node.push(NavBarAppearance::new().with_light_tint_for_controls(i % 2 == 0));
    }
    (root, nodes)
}

/// A chain `root -> n1 -> ... -> n(depth-1)`, returning the leaf.
fn chain(depth: usize) -> (NavBarAppearanceController, NavBarAppearanceController) {
    let root = NavBarAppearanceController::new();
    let mut leaf = root.clone();
    for i in 1..depth {
        leaf = leaf.branch(format!("n{i}"));
    }
    (root, leaf)
}

fn bench_nav_bar(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_bar/mutate");

    group.bench_function("push_peel/root", |b| {
        let root = NavBarAppearanceController::new();
        root.push(appearance(1));
        b.iter(|| {
            root.push(black_box(appearance(2)));
            root.peel();
        })
    });

    for depth in [2_usize, 8, 32] {
        group.bench_function(BenchmarkId::new("push_peel/leaf", depth), |b| {
            let (root, leaf) = chain(depth);
            root.push(appearance(1));
            b.iter(|| {
                leaf.push(black_box(appearance(2)));
                leaf.peel();
            })
        });
    }

    group.bench_function("push_peel/subscribed", |b| {
        let root = NavBarAppearanceController::new();
        let defaults = NavBarDefaults::for_surface(Color::WHITE);
        let _sub = root.subscribe_resolved(defaults, |bar| {
            black_box(bar);
        });
        let leaf = root.branch("screen");
        b.iter(|| {
            leaf.push(black_box(appearance(2)));
            leaf.peel();
        })
    });

    group.bench_function("remove/tagged", |b| {
        let root = NavBarAppearanceController::<u32>::root();
        for i in 0..16 {
            root.push(appearance(i).with_tag(i));
        }
        b.iter(|| {
            root.remove(black_box(&7));
            root.push(appearance(7).with_tag(7));
        })
    });

    group.finish();

    let mut group = c.benchmark_group("nav_bar/clear");

    group.bench_function("app_tree", |b| {
        b.iter_batched(
            app_tree,
            |(root, nodes)| {
                root.clear();
                black_box(nodes);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("app_tree/dialog", |b| {
        b.iter_batched(
            app_tree,
            |(root, nodes)| {
                nodes[3].clear();
                black_box(root);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_nav_bar);
criterion_main!(benches);
