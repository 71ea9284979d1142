// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tying a region's appearance to its lifecycle.
//!
//! A screen or dialog typically wants its appearance on the stack while it
//! is in the foreground, wants it gone while something covers it, and must
//! leave nothing behind once it is disposed. [`RegionAppearance`] bundles
//! those three rules around the region's own branch.

use crate::appearance::NavBarAppearance;
use crate::stack::AppearanceStack;

/// Foreground transitions of a UI region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleDirection {
    /// The region became visible and interactive.
    EnteringForeground,
    /// The region was covered, backgrounded, or is about to go away.
    LeavingForeground,
}

/// The appearance a single UI region contributes while in the foreground.
///
/// Dropping a `RegionAppearance` clears its stack.
///
/// # Example
///
/// ```rust
/// use thecolor_color::Color;
/// use thecolor_nav_bar::{
///     LifecycleDirection, NavBarAppearance, NavBarAppearanceController, RegionAppearance,
/// };
///
/// let root = NavBarAppearanceController::new();
/// let sheet = NavBarAppearance::for_surface(Color::BLACK);
///
/// let mut region = RegionAppearance::new(root.branch("details sheet"), sheet);
/// region.on_direction_change(LifecycleDirection::EnteringForeground);
/// assert_eq!(root.effective(), Some(sheet));
///
/// drop(region);
/// assert_eq!(root.effective(), None);
/// ```
#[derive(Debug)]
pub struct RegionAppearance<S: AppearanceStack> {
    stack: S,
    appearance: NavBarAppearance,
    in_foreground: bool,
}

impl<S: AppearanceStack> RegionAppearance<S> {
    /// Creates a region that will push `appearance` onto `stack`.
    ///
    /// `stack` should be a branch owned by this region alone, since leaving
    /// the foreground clears all of it.
    #[must_use]
    pub fn new(stack: S, appearance: NavBarAppearance) -> Self {
        Self {
            stack,
            appearance,
            in_foreground: false,
        }
    }

    /// Reacts to a lifecycle transition.
    ///
    /// Entering the foreground pushes the appearance once; leaving clears
    /// the stack.
    pub fn on_direction_change(&mut self, direction: LifecycleDirection) {
        match direction {
            LifecycleDirection::EnteringForeground => {
                if !self.in_foreground {
                    self.stack.push(self.appearance.into());
                    self.in_foreground = true;
                }
            }
            LifecycleDirection::LeavingForeground => {
                self.stack.clear();
                self.in_foreground = false;
            }
        }
    }

    /// Replaces the region's appearance, re-pushing it if the region is in
    /// the foreground.
    pub fn set_appearance(&mut self, appearance: NavBarAppearance) {
        if self.appearance == appearance {
            return;
        }
        self.appearance = appearance;
        if self.in_foreground {
            self.stack.clear();
            self.stack.push(appearance.into());
        }
    }

    /// The appearance this region contributes.
    #[must_use]
    pub fn appearance(&self) -> NavBarAppearance {
        self.appearance
    }

    /// Returns `true` between entering and leaving the foreground.
    #[must_use]
    pub fn is_in_foreground(&self) -> bool {
        self.in_foreground
    }

    /// The region's stack.
    #[must_use]
    pub fn stack(&self) -> &S {
        &self.stack
    }
}

impl<S: AppearanceStack> Drop for RegionAppearance<S> {
    fn drop(&mut self) {
        self.stack.clear();
    }
}
