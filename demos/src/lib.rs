// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the TheColor demos.
//!
//! Run:
//! - `cargo run -p thecolor_demos --example nav_bar_basics`
//! - `RUST_LOG=thecolor_nav_bar=trace cargo run -p thecolor_demos --example nav_bar_regions`

use std::cell::RefCell;
use std::rc::Rc;

use thecolor_nav_bar::{NavBarAppearanceController, NavBarDefaults, ResolvedNavBar, Subscription};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// `debug` for the nav bar crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,thecolor_nav_bar=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Stands in for the platform window: records every bar it is asked to
/// paint.
#[derive(Debug)]
pub struct FakeWindow {
    painted: Rc<RefCell<Vec<ResolvedNavBar>>>,
    _subscription: Subscription,
}

impl FakeWindow {
    /// Starts painting whatever `root` resolves to against `defaults`.
    pub fn attach<T: PartialEq + 'static>(
        root: &NavBarAppearanceController<T>,
        defaults: NavBarDefaults,
    ) -> Self {
        let painted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&painted);
        let subscription = root.subscribe_resolved(defaults, move |bar| {
            tracing::info!(color = %bar.color, light_controls = bar.use_light_tint_for_controls, "paint");
            sink.borrow_mut().push(bar);
        });
        Self {
            painted,
            _subscription: subscription,
        }
    }

    /// The most recently painted bar.
    pub fn current(&self) -> Option<ResolvedNavBar> {
        self.painted.borrow().last().copied()
    }

    /// How many times the bar was repainted.
    pub fn paint_count(&self) -> usize {
        self.painted.borrow().len()
    }
}
