// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The subset of the controller API that UI regions need.

use core::fmt;
use core::marker::PhantomData;

use crate::appearance::TaggedAppearance;

/// Operations a UI region performs on its appearance stack.
///
/// Code that only pushes and pops appearances should depend on this trait
/// rather than on [`NavBarAppearanceController`](crate::NavBarAppearanceController),
/// so it can be handed a [`NoopAppearanceStack`] in previews and tests.
pub trait AppearanceStack {
    /// Tag type used for targeted removal.
    type Tag;
    /// Stack type returned by [`branch`](Self::branch).
    type Branch: AppearanceStack<Tag = Self::Tag>;

    /// Adds an appearance to the top of the stack.
    fn push(&self, appearance: TaggedAppearance<Self::Tag>);

    /// Removes the top appearance. Does nothing on an empty stack.
    fn peel(&self);

    /// Removes the topmost appearance tagged `tag`, searching top to bottom.
    /// Does nothing if there is none.
    fn remove(&self, tag: &Self::Tag);

    /// Removes every appearance, including those of branches.
    fn clear(&self);

    /// Creates a child stack for a nested UI region.
    fn branch(&self, label: &str) -> Self::Branch;
}

/// An [`AppearanceStack`] that ignores everything.
pub struct NoopAppearanceStack<T = &'static str> {
    _tag: PhantomData<fn() -> T>,
}

impl<T> NoopAppearanceStack<T> {
    /// Creates a no-op stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { _tag: PhantomData }
    }
}

impl<T> Default for NoopAppearanceStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NoopAppearanceStack<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NoopAppearanceStack<T> {}

impl<T> fmt::Debug for NoopAppearanceStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoopAppearanceStack")
    }
}

impl<T> AppearanceStack for NoopAppearanceStack<T> {
    type Tag = T;
    type Branch = Self;

    fn push(&self, _appearance: TaggedAppearance<T>) {}

    fn peel(&self) {}

    fn remove(&self, _tag: &T) {}

    fn clear(&self) {}

    fn branch(&self, _label: &str) -> Self {
        Self::new()
    }
}
