// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `thecolor_color` crate.
//!
//! These cover the parts of [`Color`] that the rest of TheColor leans on:
//! reading user-typed hex codes and deciding whether a surface is dark.

use thecolor_color::{Color, ParseColorError};

#[test]
fn dark_and_light_surfaces() {
    assert!(Color::BLACK.is_dark());
    assert!(!Color::WHITE.is_dark());
    assert!(Color::from_rgb(0, 0, 0xFF).is_dark(), "pure blue is dark");
    assert!(!Color::from_rgb(0xFF, 0xFF, 0).is_dark(), "yellow is light");
    // Mid gray sits right at the threshold.
    assert!(Color::from_rgb(0x76, 0x76, 0x76).is_dark());
    assert!(!Color::from_rgb(0x78, 0x78, 0x78).is_dark());
}

#[test]
fn alpha_does_not_affect_lightness() {
    let navy = Color::from_rgb(0x00, 0x00, 0x80);
    assert_eq!(navy.is_dark(), navy.with_alpha(0x10).is_dark());
    assert_eq!(
        navy.lab_lightness().to_bits(),
        navy.with_alpha(0).lab_lightness().to_bits()
    );
}

#[test]
fn user_typed_hex_codes() {
    let parsed: Color = " #ff5722 ".parse().unwrap();
    assert_eq!(parsed.argb(), 0xFFFF_5722);
    assert_eq!(parsed.to_string(), "#FF5722");

    let translucent: Color = "33ff5722".parse().unwrap();
    assert_eq!(translucent.a(), 0x33);
    assert_eq!(translucent.to_string(), "#33FF5722");
}

#[test]
fn parse_errors_render_readably() {
    let err = "#12345".parse::<Color>().unwrap_err();
    assert_eq!(err, ParseColorError::InvalidLength(5));
    assert_eq!(err.to_string(), "expected 3, 6 or 8 hex digits, found 5");

    let err = "#zz0000".parse::<Color>().unwrap_err();
    assert_eq!(err.to_string(), "invalid hex digit 'z'");
}

#[test]
fn packed_integer_conversions() {
    let color = Color::from(0xFF12_3456_u32);
    assert_eq!(u32::from(color), 0xFF12_3456);
    assert_eq!(format!("{color:?}"), "Color(#FF123456)");
    assert_eq!(Color::default(), Color::TRANSPARENT);
}
