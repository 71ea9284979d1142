// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perceived lightness of sRGB colors.

/// `L*` below which a color counts as dark.
pub(crate) const DARK_THRESHOLD: f32 = 50.0;

/// `(6/29)^3`, where the `L*` curve switches from cube root to linear.
const EPSILON: f32 = 216.0 / 24_389.0;
/// `(29/3)^3`, slope of the linear segment.
const KAPPA: f32 = 24_389.0 / 27.0;

pub(crate) fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

pub(crate) fn lab_lightness(luminance: f32) -> f32 {
    let y = luminance.clamp(0.0, 1.0);
    if y > EPSILON {
        116.0 * cbrt(y) - 16.0
    } else {
        KAPPA * y
    }
}

fn linearize(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        powf((c + 0.055) / 1.055, 2.4)
    }
}

#[cfg(feature = "std")]
#[inline]
fn powf(x: f32, e: f32) -> f32 {
    x.powf(e)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn powf(x: f32, e: f32) -> f32 {
    libm::powf(x, e)
}

#[cfg(feature = "std")]
#[inline]
fn cbrt(x: f32) -> f32 {
    x.cbrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn cbrt(x: f32) -> f32 {
    libm::cbrtf(x)
}
