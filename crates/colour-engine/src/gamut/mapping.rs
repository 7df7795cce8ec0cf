//! Chroma-reduction gamut mapping (CSS Color 4 style).
//!
//! Out-of-gamut colours are pulled toward the neutral axis at constant hue
//! and lightness with a binary search over chroma. A candidate is accepted
//! once it is in gamut or its channel-clipped version is within a just
//! noticeable difference of it, so the search stops as soon as clipping
//! stops being visible. Clipping channels independently up front would
//! shift hue; this keeps hue.

use super::GAMUT_EPSILON;
use crate::color::{normalize_hue, DisplayP3, LinearRgb, Oklab, Oklch, Srgb};

/// Just noticeable difference, as Euclidean distance in Oklab.
pub(crate) const JND: f64 = 0.02;

/// Full Oklch chroma range the search resolution is derived from.
const CHROMA_RANGE: f64 = 0.4;

/// Chroma resolution at which the binary search stops.
const SEARCH_RESOLUTION: f64 = CHROMA_RANGE / 4000.0;

/// An RGB gamut a colour can be mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gamut {
    Srgb,
    DisplayP3,
}

impl Gamut {
    /// Gamma-encoded channels of `lab` in this gamut's RGB space, unclamped.
    pub(crate) fn project(self, lab: Oklab) -> [f64; 3] {
        match self {
            Gamut::Srgb => Srgb::from(LinearRgb::from(lab)).to_array(),
            Gamut::DisplayP3 => DisplayP3::from(lab).to_array(),
        }
    }

    fn unproject(self, [r, g, b]: [f64; 3]) -> Oklab {
        match self {
            Gamut::Srgb => Oklab::from(LinearRgb::from(Srgb::new(r, g, b))),
            Gamut::DisplayP3 => Oklab::from(DisplayP3::new(r, g, b)),
        }
    }

    /// Whether every channel lies in `[-tolerance, 1 + tolerance]`.
    pub(crate) fn contains(self, channels: [f64; 3], tolerance: f64) -> bool {
        channels
            .iter()
            .all(|&v| v >= -tolerance && v <= 1.0 + tolerance)
    }
}

fn clip(channels: [f64; 3]) -> [f64; 3] {
    channels.map(|v| v.clamp(0.0, 1.0))
}

/// Map `colour` into `gamut`, returning gamma-encoded channels.
///
/// Lightness at or beyond the ends of the range maps straight to white or
/// black. Colours that [`classify`](super::classify) places inside the gamut
/// come back with only their [`GAMUT_EPSILON`] excursions clipped.
/// Negative chroma is read as positive chroma at the opposite hue.
pub(crate) fn map_into_gamut(colour: &Oklch, gamut: Gamut) -> [f64; 3] {
    if colour.l >= 1.0 {
        return [1.0; 3];
    }
    if colour.l <= 0.0 {
        return [0.0; 3];
    }

    let colour = if colour.c < 0.0 {
        Oklch {
            c: -colour.c,
            h: colour.h.map(|h| normalize_hue(h + 180.0)),
            ..*colour
        }
    } else {
        *colour
    };

    let direct = gamut.project(Oklab::from(colour));
    if gamut.contains(direct, GAMUT_EPSILON) {
        return clip(direct);
    }

    let mut candidate = colour;
    let mut channels = direct;
    let mut clipped = clip(direct);
    let mut start = 0.0;
    let mut end = colour.c;

    while end - start > SEARCH_RESOLUTION {
        candidate.c = (start + end) * 0.5;
        let lab = Oklab::from(candidate);
        channels = gamut.project(lab);
        clipped = clip(channels);

        if gamut.contains(channels, 0.0) || lab.distance(gamut.unproject(clipped)) <= JND {
            start = candidate.c;
        } else {
            end = candidate.c;
        }
    }

    tracing::trace!(
        l = colour.l,
        c = colour.c,
        h = ?colour.h,
        ?gamut,
        mapped_chroma = candidate.c,
        "mapped colour into gamut"
    );

    if gamut.contains(channels, 0.0) {
        channels
    } else {
        clipped
    }
}
