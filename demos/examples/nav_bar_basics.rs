// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bar basics.
//!
//! A home screen previews a color, a settings dialog opens over it and is
//! dismissed, then the home screen goes away.
//!
//! Run:
//! - `cargo run -p thecolor_demos --example nav_bar_basics`

use thecolor_color::Color;
use thecolor_demos::{FakeWindow, init_tracing};
use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController, NavBarDefaults};

fn main() {
    init_tracing();

    let root = NavBarAppearanceController::new();
    let window = FakeWindow::attach(&root, NavBarDefaults::for_surface(Color::WHITE));

    let home = root.branch("home");
    for hex in ["#009688", "#FFEB3B", "#3F51B5"] {
        let Ok(preview) = hex.parse::<Color>() else {
            continue;
        };
        // Each new preview replaces the previous one.
        home.peel();
        home.push(NavBarAppearance::for_surface(preview));
        println!("home previews {preview}: {:?}", window.current());
    }

    let settings = home.branch("settings");
    settings.push(NavBarAppearance::for_surface(Color::from_rgb(0x21, 0x21, 0x21)));
    println!("{} open: {:?}", settings.path(), window.current());

    // Only the tint is overridden; the color still comes from the dialog.
    settings.push(NavBarAppearance::new().with_light_tint_for_controls(false));
    println!("tint override: {:?}", window.current());

    settings.clear();
    println!("settings dismissed: {:?}", window.current());

    home.clear();
    println!("home gone: {:?}", window.current());
    println!("painted {} times", window.paint_count());
}
