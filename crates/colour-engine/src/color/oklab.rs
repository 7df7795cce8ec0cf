//! Oklab, the Cartesian form behind [`Oklch`](super::Oklch).
//!
//! Straight-line distance here is the colour difference used by the gamut
//! mapper (its just-noticeable-difference check) and by the name matcher.
//! Matrices are Björn Ottosson's 2021-01-25 revision,
//! <https://bottosson.github.io/posts/oklab/>.

use super::linear_rgb::LinearRgb;

/// Lightness plus two opponent axes.
///
/// `a` runs green (negative) to red, `b` runs blue (negative) to yellow.
/// Nothing is clamped, so colours no display can show still convert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared colour difference, for comparisons that never need the root.
    ///
    /// ```
    /// use colour_engine::Oklab;
    ///
    /// let mid_grey = Oklab::new(0.5, 0.0, 0.0);
    /// let near = Oklab::new(0.5, 0.03, 0.04);
    /// assert!((mid_grey.distance_squared(near) - 0.0025).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Oklab) -> f64 {
        let (dl, da, db) = (self.l - other.l, self.a - other.a, self.b - other.b);
        dl * dl + da * da + db * db
    }

    /// Colour difference (deltaEOK).
    #[inline]
    pub fn distance(self, other: Oklab) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<LinearRgb> for Oklab {
    fn from(rgb: LinearRgb) -> Self {
        // cone response
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());

        Oklab {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Inverse transform. Channels of out-of-gamut input land outside
    /// `0.0..=1.0`; gamut tests rely on seeing them unclamped.
    fn from(lab: Oklab) -> Self {
        let l = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}
