//! Display P3, the wide gamut most current displays cover.
//!
//! P3 uses the sRGB transfer curve with wider primaries. Conversion goes
//! linear sRGB -> CIE XYZ (D65) -> linear P3 and back.

use serde::{Deserialize, Serialize};

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::transfer::{linear_to_srgb, srgb_to_linear};

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js
#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js
#[rustfmt::skip]
const LINEAR_P3_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_P3: [[f64; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

fn multiply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

/// A colour in gamma-encoded Display P3.
///
/// Channels in `0.0..=1.0` are displayable on a P3 screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayP3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "super::opaque")]
    pub alpha: f64,
}

impl DisplayP3 {
    /// Create an opaque P3 colour.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<LinearRgb> for DisplayP3 {
    fn from(linear: LinearRgb) -> Self {
        let xyz = multiply(&LINEAR_SRGB_TO_XYZ, linear.to_array());
        let [r, g, b] = multiply(&XYZ_TO_LINEAR_P3, xyz);
        Self::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }
}

impl From<DisplayP3> for LinearRgb {
    fn from(p3: DisplayP3) -> Self {
        let linear_p3 = [
            srgb_to_linear(p3.r),
            srgb_to_linear(p3.g),
            srgb_to_linear(p3.b),
        ];
        let xyz = multiply(&LINEAR_P3_TO_XYZ, linear_p3);
        LinearRgb::from_array(multiply(&XYZ_TO_LINEAR_SRGB, xyz))
    }
}

impl From<Oklab> for DisplayP3 {
    fn from(lab: Oklab) -> Self {
        DisplayP3::from(LinearRgb::from(lab))
    }
}

impl From<DisplayP3> for Oklab {
    fn from(p3: DisplayP3) -> Self {
        Oklab::from(LinearRgb::from(p3))
    }
}
