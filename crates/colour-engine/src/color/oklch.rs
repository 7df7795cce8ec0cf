//! Oklch, the canonical colour representation.
//!
//! Oklch is the polar form of Oklab:
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): distance from the neutral axis
//! - **h** (Hue): angle in degrees, undefined for achromatic colours
//!
//! Scaling chroma at fixed hue and lightness does not shift the perceived
//! hue, which is what makes gamut mapping and shade ramps work here.

use serde::{Deserialize, Serialize};

use super::oklab::Oklab;
use crate::error::FormatError;

/// Chroma below which a converted colour is treated as having no hue.
///
/// Greys that pass through the Oklab matrices keep a residual chroma in
/// the 1e-8 range; a hue computed from that noise is meaningless.
pub const ACHROMATIC_THRESHOLD: f64 = 1e-6;

/// A colour in Oklch space, the state the picker edits.
///
/// Nothing is clamped or normalized on construction: lightness may leave
/// `0.0..=1.0`, chroma may exceed the displayable range and hue may be any
/// number of degrees. Callers normalize hue after arithmetic; converters and
/// formatters accept whatever they are handed.
///
/// Equality with `==` compares alpha as well. History and palette keys use
/// [`Oklch::same_colour`], which ignores alpha.
///
/// # Example
///
/// ```
/// use colour_engine::Oklch;
///
/// let teal = Oklch::new(0.7, 0.15, 200.0);
/// assert_eq!(teal.h, Some(200.0));
/// assert_eq!(teal.alpha, 1.0);
///
/// let grey = Oklch::achromatic(0.5);
/// assert_eq!(grey.h, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colours
    pub l: f64,
    /// Chroma: 0.0 (grey) to about 0.4
    pub c: f64,
    /// Hue in degrees, `None` for achromatic colours
    #[serde(default)]
    pub h: Option<f64>,
    /// Opacity, 1.0 when absent
    #[serde(default = "super::opaque")]
    pub alpha: f64,
}

/// The picker's colour value. Oklch is the canonical representation.
pub type ColourValue = Oklch;

impl Oklch {
    /// Create an opaque colour with a defined hue.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: Some(h),
            alpha: 1.0,
        }
    }

    /// Create an opaque grey with no hue.
    #[inline]
    pub fn achromatic(l: f64) -> Self {
        Self {
            l,
            c: 0.0,
            h: None,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    #[inline]
    pub fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }

    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self { h: Some(h), ..self }
    }

    /// By-value identity on (l, c, h), ignoring alpha.
    #[inline]
    pub fn same_colour(&self, other: &Oklch) -> bool {
        self.l == other.l && self.c == other.c && self.h == other.h
    }

    /// Reject NaN and infinite components.
    pub fn validate(&self) -> Result<(), FormatError> {
        check_finite("lightness", self.l)?;
        check_finite("chroma", self.c)?;
        if let Some(h) = self.h {
            check_finite("hue", h)?;
        }
        check_finite("alpha", self.alpha)
    }
}

pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<(), FormatError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::NonFinite { component, value })
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar. Alpha is set to 1.
    ///
    /// Hue is left undefined when chroma is below [`ACHROMATIC_THRESHOLD`].
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_THRESHOLD {
            None
        } else {
            Some(normalize_hue(lab.b.atan2(lab.a).to_degrees()))
        };
        Self {
            l: lab.l,
            c,
            h,
            alpha: 1.0,
        }
    }
}

impl From<Oklch> for Oklab {
    /// Polar to Cartesian. An undefined hue puts the colour on the neutral axis.
    fn from(lch: Oklch) -> Self {
        match lch.h {
            Some(h) => {
                let rad = h.to_radians();
                Self::new(lch.l, lch.c * rad.cos(), lch.c * rad.sin())
            }
            None => Self::new(lch.l, 0.0, 0.0),
        }
    }
}
