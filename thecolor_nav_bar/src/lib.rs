// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thecolor_nav_bar --heading-base-level=0

//! TheColor Nav Bar: layered navigation bar appearances.
//!
//! Several parts of TheColor want to restyle the system navigation bar at
//! once: the home screen tints it to match the color being previewed, a
//! details sheet over it tints it to the sheet's surface, and so on. Each of
//! them has its own lifecycle. This crate lets them do so without stepping
//! on each other.
//!
//! The core type is [`NavBarAppearanceController`], a node in a tree:
//!
//! - Each node owns a **stack** of [`NavBarAppearance`]s pushed by one UI
//!   region, optionally tagged for targeted [`remove`]al.
//! - Nested regions get their own child node via [`branch`].
//! - Every node exposes an **effective** appearance: all surviving entries
//!   of its subtree, merged newest over oldest. The most recent write
//!   anywhere in the subtree wins; fields it leaves [`Setting::Unset`] come
//!   from older entries.
//! - [`clear`] empties a node and all of its descendants, so a region that
//!   goes away leaves nothing behind.
//!
//! The effective appearance is a [`Signal`](signal::Signal): a current value
//! that subscribers receive immediately and then on every change.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use thecolor_color::Color;
//! use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController, NavBarDefaults};
//!
//! let root = NavBarAppearanceController::new();
//!
//! // Whatever paints the bar subscribes to the root.
//! let painted = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&painted);
//! let defaults = NavBarDefaults::for_surface(Color::WHITE);
//! let _paint = root.subscribe_resolved(defaults, move |bar| sink.borrow_mut().push(bar.color));
//!
//! // A screen pushes the color it previews; a dialog over it pushes its own.
//! let preview = Color::from_rgb(0x00, 0x96, 0x88);
//! root.push(NavBarAppearance::for_surface(preview));
//! let dialog = root.branch("dialog");
//! dialog.push(NavBarAppearance::for_surface(Color::BLACK));
//!
//! // The dialog is dismissed.
//! dialog.clear();
//!
//! assert_eq!(*painted.borrow(), [Color::WHITE, preview, Color::BLACK, preview]);
//! ```
//!
//! ## Lifecycles
//!
//! The controller does not detect when a region goes away; its owner calls
//! [`clear`] (or [`detach`]). [`RegionAppearance`] wraps the common pattern:
//! push while in the foreground, clear when leaving it, clear on drop.
//!
//! Code that only needs to push and pop can depend on the [`AppearanceStack`]
//! trait and be handed a [`NoopAppearanceStack`] where no bar exists.
//!
//! ## Threading
//!
//! The tree is single-threaded (`!Send`). Every mutation recomputes the
//! affected nodes and notifies subscribers before returning.
//!
//! ## Features
//!
//! - `std` (default): forwards to `thecolor_color/std`.
//! - `libm`: `no_std` float math for `thecolor_color`.
//! - `tracing`: emit `tracing` events for mutations and appearance changes.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`remove`]: NavBarAppearanceController::remove
//! [`branch`]: NavBarAppearanceController::branch
//! [`clear`]: NavBarAppearanceController::clear
//! [`detach`]: NavBarAppearanceController::detach

#![no_std]

extern crate alloc;

mod appearance;
mod controller;
mod defaults;
mod logging;
mod region;
pub mod signal;
mod stack;

pub use appearance::{NavBarAppearance, Setting, TaggedAppearance};
pub use controller::{NavBarAppearanceController, ROOT_LABEL};
pub use defaults::{NavBarDefaults, ResolvedNavBar};
pub use region::{LifecycleDirection, RegionAppearance};
pub use signal::Subscription;
pub use stack::{AppearanceStack, NoopAppearanceStack};
