//! Gamma-encoded sRGB, the `rgb()` and hex projection.
//!
//! sRGB is the gamut every browser can show. Channels live in `0.0..=1.0`
//! and are scaled to `0..=255` only when formatting.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::linear_rgb::LinearRgb;
use super::transfer::linear_to_srgb;
use crate::error::ParseHexError;

/// Gamma-encoded sRGB channels plus alpha.
///
/// This is the "rgb" projection of a [`Oklch`](super::Oklch) colour. It is
/// never the canonical state of a colour; it is recomputed on demand.
/// Values outside `0.0..=1.0` mean the colour is outside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Opacity, 1.0 when absent
    #[serde(default = "super::opaque")]
    pub alpha: f64,
}

impl Srgb {
    /// Opaque colour from unit-range channels.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Opaque colour from CSS byte channels.
    ///
    /// ```
    /// use colour_engine::Srgb;
    ///
    /// let rebecca = Srgb::from_u8(0x66, 0x33, 0x99);
    /// assert_eq!(rebecca.to_bytes(), [0x66, 0x33, 0x99]);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Same as [`Srgb::from_u8`] for a `[r, g, b]` array.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// CSS byte channels, rounded and clamped into `0..=255`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<LinearRgb> for Srgb {
    /// Applies the transfer curve; the result is opaque.
    fn from(linear: LinearRgb) -> Self {
        Self::new(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

impl FromStr for Srgb {
    type Err = ParseHexError;

    /// Hex notation: 3, 4, 6 or 8 digits, hash optional, any case.
    ///
    /// ```
    /// use colour_engine::Srgb;
    ///
    /// let teal: Srgb = "#008080".parse().unwrap();
    /// assert_eq!(teal.to_bytes(), [0, 128, 128]);
    ///
    /// let faded: Srgb = "#f008".parse().unwrap();
    /// assert_eq!(faded.to_bytes(), [255, 0, 0]);
    /// assert!(faded.alpha < 1.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let nibbles = s
            .chars()
            .map(|ch| match ch.to_digit(16) {
                Some(d) => Ok(d as u8),
                None => Err(ParseHexError::InvalidDigit(ch)),
            })
            .collect::<Result<Vec<u8>, _>>();

        let count = s.chars().count();
        let nibbles = match count {
            3 | 4 | 6 | 8 => nibbles?,
            n => return Err(ParseHexError::InvalidLength(n)),
        };
        let digits: Vec<u8> = if count <= 4 {
            // 0xf -> 0xff
            nibbles.iter().map(|d| d * 17).collect()
        } else {
            nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect()
        };

        let colour = Self::from_u8(digits[0], digits[1], digits[2]);
        Ok(match digits.get(3) {
            Some(&a) => colour.with_alpha(a as f64 / 255.0),
            None => colour,
        })
    }
}
