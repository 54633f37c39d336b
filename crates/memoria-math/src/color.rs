//! 8-bit RGB colors with hex parsing and linear interpolation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string is not of the form `#rrggbb`.
    #[error("expected a '#rrggbb' color, got {0:?}")]
    Malformed(String),

    /// A channel pair contained a non-hexadecimal digit.
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit-per-channel RGB color.
///
/// Parses from and serializes to the `#rrggbb` hex form used by the
/// rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::Malformed(hex.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Malformed(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as a lower-case `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linearly interpolate between two colors per channel.
    ///
    /// `factor` is clamped to `[0.0, 1.0]`, so the endpoints are exact:
    /// `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
    pub fn lerp(a: Rgb, b: Rgb, factor: f64) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        let mix = |c1: u8, c2: u8| (c1 as f64 + (c2 as f64 - c1 as f64) * factor).round() as u8;
        Rgb {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(D::Error::custom)
    }
}
