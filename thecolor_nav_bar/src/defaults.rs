// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filling an effective appearance in with platform defaults.

use thecolor_color::Color;

use crate::appearance::NavBarAppearance;

/// What the navigation bar looks like when nobody asks for anything.
///
/// Usually derived from the current theme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavBarDefaults {
    /// Default bar color.
    pub color: Color,
    /// Default control tint.
    pub use_light_tint_for_controls: bool,
}

/// A fully specified navigation bar, ready to be painted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedNavBar {
    /// Bar color.
    pub color: Color,
    /// Whether controls are tinted light.
    pub use_light_tint_for_controls: bool,
}

impl NavBarDefaults {
    /// Defaults matching a theme surface: controls are light on dark
    /// surfaces.
    #[must_use]
    pub fn for_surface(color: Color) -> Self {
        Self {
            color,
            use_light_tint_for_controls: color.is_dark(),
        }
    }

    /// Resolves an effective appearance against these defaults.
    ///
    /// `None` resolves to the defaults; unset fields take the default value.
    #[must_use]
    pub fn resolve(&self, appearance: Option<&NavBarAppearance>) -> ResolvedNavBar {
        let appearance = appearance.copied().unwrap_or_default();
        ResolvedNavBar {
            color: appearance.color.unwrap_or(self.color),
            use_light_tint_for_controls: appearance
                .use_light_tint_for_controls
                .unwrap_or(self.use_light_tint_for_controls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: NavBarDefaults = NavBarDefaults {
        color: Color::WHITE,
        use_light_tint_for_controls: false,
    };

    #[test]
    fn absent_appearance_resolves_to_defaults() {
        assert_eq!(
            DEFAULTS.resolve(None),
            ResolvedNavBar {
                color: Color::WHITE,
                use_light_tint_for_controls: false,
            }
        );
    }

    #[test]
    fn unset_fields_take_defaults() {
        let tint_only = NavBarAppearance::new().with_light_tint_for_controls(true);
        assert_eq!(
            DEFAULTS.resolve(Some(&tint_only)),
            ResolvedNavBar {
                color: Color::WHITE,
                use_light_tint_for_controls: true,
            }
        );
    }

    #[test]
    fn surface_defaults_follow_lightness() {
        assert!(NavBarDefaults::for_surface(Color::BLACK).use_light_tint_for_controls);
        assert!(!NavBarDefaults::for_surface(Color::WHITE).use_light_tint_for_controls);
    }
}
