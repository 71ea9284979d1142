// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance values pushed onto stacks.

use thecolor_color::Color;

/// A single appearance field: either left to whoever is below, or set.
///
/// This is distinct from an appearance being absent altogether. An
/// appearance with every field [`Setting::Unset`] still occupies a slot in a
/// stack; it simply lets older entries (or the platform default) show
/// through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Setting<T> {
    /// Inherit from the entry below, or from the default.
    Unset,
    /// Use this value.
    Set(T),
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Setting<T> {
    /// Returns `true` if a value is set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Converts to an [`Option`], consuming the setting.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Borrows the value, if set.
    #[must_use]
    pub const fn as_ref(&self) -> Setting<&T> {
        match self {
            Self::Set(value) => Setting::Set(value),
            Self::Unset => Setting::Unset,
        }
    }

    /// Layers `self` on top of `below`: a set value wins, otherwise `below`
    /// shows through.
    #[must_use]
    pub fn or(self, below: Self) -> Self {
        match self {
            Self::Set(value) => Self::Set(value),
            Self::Unset => below,
        }
    }

    /// Returns the value, or `default` if unset.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Set(value) => value,
            Self::Unset => default,
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Unset,
        }
    }
}

impl<T> From<Setting<T>> for Option<T> {
    fn from(setting: Setting<T>) -> Self {
        setting.into_option()
    }
}

/// Platform-agnostic description of how the navigation bar should look.
///
/// # Example
///
/// ```rust
/// use thecolor_color::Color;
/// use thecolor_nav_bar::{NavBarAppearance, Setting};
///
/// let surface = Color::from_rgb(0x1A, 0x23, 0x7E);
/// let appearance = NavBarAppearance::for_surface(surface);
/// assert_eq!(appearance.color, Setting::Set(surface));
/// // Dark surface, light controls.
/// assert_eq!(appearance.use_light_tint_for_controls, Setting::Set(true));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NavBarAppearance {
    /// Background color of the bar.
    pub color: Setting<Color>,
    /// Whether controls should be light, to contrast against a dark color.
    pub use_light_tint_for_controls: Setting<bool>,
}

impl NavBarAppearance {
    /// An appearance with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: Setting::Unset,
            use_light_tint_for_controls: Setting::Unset,
        }
    }

    /// An appearance matching a surface of the given color: the bar takes
    /// the color, and controls are light if the color is dark.
    #[must_use]
    pub fn for_surface(color: Color) -> Self {
        Self::new()
            .with_color(color)
            .with_light_tint_for_controls(color.is_dark())
    }

    /// Returns `self` with the color set.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Setting::Set(color);
        self
    }

    /// Returns `self` with the control tint preference set.
    #[must_use]
    pub const fn with_light_tint_for_controls(mut self, light: bool) -> Self {
        self.use_light_tint_for_controls = Setting::Set(light);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        !self.color.is_set() && !self.use_light_tint_for_controls.is_set()
    }

    /// Merges `self` on top of `below`, field by field.
    #[must_use]
    pub fn over(self, below: Self) -> Self {
        Self {
            color: self.color.or(below.color),
            use_light_tint_for_controls: self
                .use_light_tint_for_controls
                .or(below.use_light_tint_for_controls),
        }
    }

    /// Pairs this appearance with a tag for later targeted removal.
    #[must_use]
    pub fn with_tag<T>(self, tag: T) -> TaggedAppearance<T> {
        TaggedAppearance {
            appearance: self,
            tag: Some(tag),
        }
    }
}

/// An appearance as stored in a stack, with an optional tag.
///
/// Tags need not be unique; see
/// [`NavBarAppearanceController::remove`](crate::NavBarAppearanceController::remove).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaggedAppearance<T> {
    /// The appearance itself.
    pub appearance: NavBarAppearance,
    /// Identity used by targeted removal.
    pub tag: Option<T>,
}

impl<T> TaggedAppearance<T> {
    /// Wraps an appearance without a tag.
    #[must_use]
    pub const fn untagged(appearance: NavBarAppearance) -> Self {
        Self {
            appearance,
            tag: None,
        }
    }
}

impl<T> From<NavBarAppearance> for TaggedAppearance<T> {
    fn from(appearance: NavBarAppearance) -> Self {
        Self::untagged(appearance)
    }
}
