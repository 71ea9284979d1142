// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex string parsing.

use core::fmt;
use core::str::FromStr;

use crate::Color;

/// Error returned when a string is not a valid hex color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input had no digits.
    Empty,
    /// The number of digits was not 3, 6 or 8.
    InvalidLength(usize),
    /// The input contained a character that is not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color string"),
            Self::InvalidLength(len) => {
                write!(f, "expected 3, 6 or 8 hex digits, found {len}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl core::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let mut value = 0_u32;
        for c in digits.chars() {
            let digit = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            value = (value << 4) | digit;
        }
        match digits.len() {
            3 => {
                let expand = |nibble: u32| (nibble & 0xF) * 0x11;
                Ok(Self::from_argb(
                    0xFF00_0000
                        | (expand(value >> 8) << 16)
                        | (expand(value >> 4) << 8)
                        | expand(value),
                ))
            }
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
