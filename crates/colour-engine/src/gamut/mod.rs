//! Gamut classification and mapping.
//!
//! [`classify`] reports the smallest RGB gamut a colour fits in. The
//! converters in [`crate::convert`] use [`mapping`] to bring colours outside
//! a gamut back inside it.

pub(crate) mod mapping;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Oklab, Oklch};
use mapping::Gamut;

/// Channel tolerance for the gamut membership tests.
///
/// Colours that round-trip through another space pick up tiny excursions
/// past 0 or 1; anything within this margin still counts as inside.
pub const GAMUT_EPSILON: f64 = 0.0001;

/// Smallest display gamut a colour fits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Inside sRGB.
    Srgb,
    /// Outside sRGB but inside Display P3.
    P3,
    /// Outside both.
    #[serde(rename = "out")]
    OutOfGamut,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Space::Srgb => "sRGB",
            Space::P3 => "P3",
            Space::OutOfGamut => "Out of gamut",
        })
    }
}

/// Whether the colour's sRGB projection lies within [`GAMUT_EPSILON`] of the unit cube.
pub fn in_srgb(colour: &Oklch) -> bool {
    fits(colour, Gamut::Srgb)
}

/// Whether the colour's Display P3 projection lies within [`GAMUT_EPSILON`] of the unit cube.
pub fn in_p3(colour: &Oklch) -> bool {
    fits(colour, Gamut::DisplayP3)
}

fn fits(colour: &Oklch, gamut: Gamut) -> bool {
    gamut.contains(gamut.project(Oklab::from(*colour)), GAMUT_EPSILON)
}

/// Classify a colour as sRGB, P3 or out of gamut.
///
/// sRGB is tested first, so every sRGB colour reports [`Space::Srgb`] even
/// though P3 contains it too.
///
/// ```
/// use colour_engine::{classify, Oklch, Space};
///
/// assert_eq!(classify(&Oklch::new(0.7, 0.1, 200.0)), Space::Srgb);
/// assert_eq!(classify(&Oklch::new(0.6, 0.4, 140.0)), Space::OutOfGamut);
/// ```
pub fn classify(colour: &Oklch) -> Space {
    if in_srgb(colour) {
        Space::Srgb
    } else if in_p3(colour) {
        Space::P3
    } else {
        Space::OutOfGamut
    }
}
