// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regions following their lifecycles.
//!
//! Two sheets share one screen. Each contributes its appearance while in the
//! foreground; tagged entries are removed individually.
//!
//! Run:
//! - `RUST_LOG=thecolor_nav_bar=trace cargo run -p thecolor_demos --example nav_bar_regions`

use thecolor_color::Color;
use thecolor_demos::{FakeWindow, init_tracing};
use thecolor_nav_bar::{
    LifecycleDirection, NavBarAppearance, NavBarAppearanceController, NavBarDefaults,
    RegionAppearance,
};

fn main() {
    init_tracing();

    let root = NavBarAppearanceController::new();
    let window = FakeWindow::attach(&root, NavBarDefaults::for_surface(Color::BLACK));

    let screen = root.branch("color center");
    screen.push(NavBarAppearance::for_surface(Color::from_rgb(0xFF, 0x57, 0x22)).with_tag("accent"));
    screen.push(NavBarAppearance::new().with_light_tint_for_controls(true).with_tag("tint"));

    let mut details = RegionAppearance::new(
        screen.branch("details sheet"),
        NavBarAppearance::for_surface(Color::WHITE),
    );
    let mut exchange = RegionAppearance::new(
        screen.branch("exchange sheet"),
        NavBarAppearance::for_surface(Color::from_rgb(0x30, 0x30, 0x30)),
    );

    details.on_direction_change(LifecycleDirection::EnteringForeground);
    println!("details: {:?}", window.current());

    exchange.on_direction_change(LifecycleDirection::EnteringForeground);
    println!("details + exchange: {:?}", window.current());

    details.on_direction_change(LifecycleDirection::LeavingForeground);
    println!("exchange only: {:?}", window.current());

    drop(exchange);
    println!("sheets gone: {:?}", window.current());

    screen.remove(&"tint");
    println!("tint removed: {:?}", window.current());

    screen.detach();
    println!("screen detached: {:?}", window.current());
    println!("painted {} times", window.paint_count());
}
