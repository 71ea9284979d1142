// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thecolor_color --heading-base-level=0

//! TheColor Color: the color value carried through TheColor's UI plumbing.
//!
//! [`Color`] is a packed 8-bit `ARGB` value, the same layout platform color
//! integers use. The crate deliberately stays small: it knows how to build a
//! color from components or a hex string, how to print it back, and how
//! light it looks to a human, which is what decides whether controls drawn on
//! top of it should be tinted light or dark.
//!
//! ## Minimal example
//!
//! ```rust
//! use thecolor_color::Color;
//!
//! let color: Color = "#1A237E".parse().unwrap();
//! assert_eq!(color, Color::from_rgb(0x1A, 0x23, 0x7E));
//! assert_eq!(color.to_string(), "#1A237E");
//!
//! // Deep indigo is dark, so controls on top of it should be light.
//! assert!(color.is_dark());
//! ```
//!
//! ## Hex formats
//!
//! Parsing accepts an optional leading `#` followed by `RGB`, `RRGGBB` or
//! `AARRGGBB` hex digits. Failures are reported as [`ParseColorError`].
//!
//! ## Features
//!
//! - `std` (default): use the standard library float functions.
//! - `libm`: use `libm` for float functions in `no_std` builds.
//!
//! One of the two must be enabled for the lightness helpers.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("thecolor_color requires either the `std` or the `libm` feature");

mod lightness;
mod parse;

use core::fmt;

pub use parse::ParseColorError;

/// An 8-bit sRGB color with alpha, packed as `0xAARRGGBB`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    argb: u32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_argb(0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self::from_argb(0xFFFF_FFFF);

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Creates an opaque color from its red, green and blue components.
    #[must_use]
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb_components(0xFF, r, g, b)
    }

    /// Creates a color from alpha, red, green and blue components.
    #[must_use]
    #[inline]
    pub const fn from_argb_components(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32),
        }
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn argb(self) -> u32 {
        self.argb
    }

    /// Alpha component.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "extracting one byte")]
    pub const fn a(self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Red component.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "extracting one byte")]
    pub const fn r(self) -> u8 {
        (self.argb >> 16) as u8
    }

    /// Green component.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "extracting one byte")]
    pub const fn g(self) -> u8 {
        (self.argb >> 8) as u8
    }

    /// Blue component.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "extracting one byte")]
    pub const fn b(self) -> u8 {
        self.argb as u8
    }

    /// Returns `true` if the alpha component is `0xFF`.
    #[must_use]
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }

    /// Returns the same color with the alpha component replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::from_argb_components(a, self.r(), self.g(), self.b())
    }

    /// Relative luminance in `0.0..=1.0`, as defined by WCAG for sRGB.
    ///
    /// Alpha is ignored.
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        lightness::relative_luminance(self.r(), self.g(), self.b())
    }

    /// CIE `L*` lightness in `0.0..=100.0`.
    ///
    /// Unlike HSL lightness this follows human perception, so it is the
    /// measure used by [`Color::is_dark`].
    #[must_use]
    pub fn lab_lightness(self) -> f32 {
        lightness::lab_lightness(self.relative_luminance())
    }

    /// Returns `true` if content drawn on this color should be light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.lab_lightness() < lightness::DARK_THRESHOLD
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06X}", self.argb & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.argb)
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.argb()
    }
}
