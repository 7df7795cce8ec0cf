//! HSL, a cylindrical view of gamma-encoded sRGB.
//!
//! HSL shares the sRGB gamut, so it is always derived from an sRGB colour
//! that has already been gamut mapped.

use serde::{Deserialize, Serialize};

use super::srgb::Srgb;

/// A colour in HSL.
///
/// Hue is undefined for greys and saturation may be missing when the value
/// comes from outside this crate. Formatting fills the gaps with 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `None` for greys
    #[serde(default)]
    pub h: Option<f64>,
    /// Saturation, 0.0..=1.0
    #[serde(default)]
    pub s: Option<f64>,
    /// Lightness, 0.0..=1.0
    pub l: f64,
    #[serde(default = "super::opaque")]
    pub alpha: f64,
}

impl Hsl {
    /// Create an opaque HSL colour with defined hue and saturation.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: Some(h),
            s: Some(s),
            l,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl From<Srgb> for Hsl {
    fn from(rgb: Srgb) -> Self {
        let Srgb { r, g, b, alpha } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (max + min - 1.0).abs())
        };

        let h = if delta == 0.0 {
            None
        } else if max == r {
            let offset = if g < b { 6.0 } else { 0.0 };
            Some(((g - b) / delta + offset) * 60.0)
        } else if max == g {
            Some(((b - r) / delta + 2.0) * 60.0)
        } else {
            Some(((r - g) / delta + 4.0) * 60.0)
        };

        Self {
            h,
            s: Some(s),
            l: (max + min) / 2.0,
            alpha,
        }
    }
}

impl From<Hsl> for Srgb {
    fn from(hsl: Hsl) -> Self {
        let h = hsl.h.unwrap_or(0.0).rem_euclid(360.0) / 60.0;
        let s = hsl.s.unwrap_or(0.0);
        let l = hsl.l;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;

        Srgb::new(r + m, g + m, b + m).with_alpha(hsl.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primaries() {
        let red = Hsl::from(Srgb::new(1.0, 0.0, 0.0));
        assert_eq!(red, Hsl::new(0.0, 1.0, 0.5));

        let green = Hsl::from(Srgb::new(0.0, 1.0, 0.0));
        assert_eq!(green.h, Some(120.0));

        let blue = Hsl::from(Srgb::new(0.0, 0.0, 1.0));
        assert_eq!(blue.h, Some(240.0));
    }

    #[test]
    fn test_grey_has_no_hue() {
        let grey = Hsl::from(Srgb::new(0.5, 0.5, 0.5));
        assert_eq!(grey.h, None);
        assert_eq!(grey.s, Some(0.0));
        assert_eq!(grey.l, 0.5);
    }

    #[test]
    fn test_magenta_side_wraps_below_360() {
        // r max with g < b lands in (300, 360)
        let pink = Hsl::from(Srgb::new(1.0, 0.0, 0.5));
        let h = pink.h.unwrap();
        assert!(approx_eq(h, 330.0), "h = {h}");
    }

    #[test]
    fn test_round_trip() {
        for rgb in [
            Srgb::new(0.2, 0.4, 0.6),
            Srgb::new(0.9, 0.1, 0.3),
            Srgb::new(0.5, 0.5, 0.1),
            Srgb::new(0.0, 0.0, 0.0),
            Srgb::new(1.0, 1.0, 1.0),
        ] {
            let back = Srgb::from(Hsl::from(rgb));
            assert!(
                approx_eq(rgb.r, back.r) && approx_eq(rgb.g, back.g) && approx_eq(rgb.b, back.b),
                "{rgb:?} came back as {back:?}"
            );
        }
    }

    #[test]
    fn test_alpha_is_carried() {
        let hsl = Hsl::from(Srgb::new(1.0, 0.0, 0.0).with_alpha(0.25));
        assert_eq!(hsl.alpha, 0.25);
        assert_eq!(Srgb::from(hsl).alpha, 0.25);
    }
}
