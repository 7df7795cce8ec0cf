//! Projections of an [`Oklch`] colour into the display spaces.
//!
//! Every converter is total. Colours outside the target gamut are mapped
//! into it by chroma reduction. Colours that classify inside it come back
//! unchanged, with matrix noise past 0 or 1 clipped.

use crate::color::{DisplayP3, Hsl, Oklab, Oklch, Srgb};
use crate::gamut::mapping::{map_into_gamut, Gamut};

/// Gamut-mapped sRGB. Alpha is carried over.
///
/// ```
/// use colour_engine::{to_rgb, Oklch};
///
/// let rgb = to_rgb(&Oklch::new(0.6, 0.4, 140.0));
/// assert!([rgb.r, rgb.g, rgb.b].iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
pub fn to_rgb(colour: &Oklch) -> Srgb {
    let [r, g, b] = map_into_gamut(colour, Gamut::Srgb);
    Srgb::new(r, g, b).with_alpha(colour.alpha)
}

/// Gamut-mapped HSL. HSL shares the sRGB gamut.
pub fn to_hsl(colour: &Oklch) -> Hsl {
    Hsl::from(to_rgb(colour))
}

/// Gamut-mapped Display P3. Alpha is carried over.
pub fn to_p3(colour: &Oklch) -> DisplayP3 {
    let [r, g, b] = map_into_gamut(colour, Gamut::DisplayP3);
    DisplayP3::new(r, g, b).with_alpha(colour.alpha)
}

/// Convert anything with an Oklch form. Oklch is unbounded, so there is no
/// gamut step.
pub fn to_oklch(colour: impl Into<Oklch>) -> Oklch {
    colour.into()
}

/// Unmapped sRGB projection, channels may leave `0.0..=1.0`.
pub(crate) fn project_rgb(colour: &Oklch) -> Srgb {
    let [r, g, b] = Gamut::Srgb.project(Oklab::from(*colour));
    Srgb::new(r, g, b).with_alpha(colour.alpha)
}
