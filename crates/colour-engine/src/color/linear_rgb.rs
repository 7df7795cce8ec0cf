//! Linear-light sRGB.
//!
//! Linear RGB is the space where the Oklab matrices and the XYZ matrices
//! used for Display P3 operate. It never leaves the crate as a formatted
//! value; callers see gamma-encoded [`Srgb`] or [`DisplayP3`](super::DisplayP3).

use super::srgb::Srgb;
use super::transfer::srgb_to_linear;

/// Linear-light sRGB channels, without alpha.
///
/// Values may fall outside `0.0..=1.0` for colors outside the sRGB gamut.
/// Nothing here clamps; gamut handling belongs to [`crate::gamut`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub(crate) fn from_array([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Undo the transfer curve. Alpha is dropped.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
