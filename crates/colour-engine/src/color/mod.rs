//! Colour types and conversions
//!
//! [`Oklch`] is the canonical representation. Every other type here is a
//! projection recomputed from it on demand.
//!
//! # Color Spaces
//!
//! - **Oklch / Oklab**: perceptual, unbounded. Oklch is what the picker edits.
//! - **Srgb**: gamma-encoded standard gamut, for `rgb()` and hex output.
//! - **Hsl**: cylindrical view of sRGB, for `hsl()` output.
//! - **DisplayP3**: gamma-encoded wide gamut.
//! - **LinearRgb**: linear light, the pivot between Oklab and the RGB spaces.
//!
//! # Example
//!
//! ```
//! use colour_engine::{LinearRgb, Oklab, Oklch, Srgb};
//!
//! let srgb = Srgb::from_u8(255, 128, 64);
//! let oklch = Oklch::from(Oklab::from(LinearRgb::from(srgb)));
//! assert!(oklch.h.is_some());
//! ```

mod display_p3;
mod hsl;
mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;
mod transfer;

pub use display_p3::DisplayP3;
pub use hsl::Hsl;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::{normalize_hue, ColourValue, Oklch, ACHROMATIC_THRESHOLD};
pub use srgb::Srgb;

pub(crate) use oklch::check_finite;

fn opaque() -> f64 {
    1.0
}

impl From<Srgb> for Oklch {
    fn from(rgb: Srgb) -> Self {
        Oklch::from(Oklab::from(LinearRgb::from(rgb))).with_alpha(rgb.alpha)
    }
}

impl From<Hsl> for Oklch {
    fn from(hsl: Hsl) -> Self {
        Oklch::from(Srgb::from(hsl))
    }
}

impl From<DisplayP3> for Oklch {
    fn from(p3: DisplayP3) -> Self {
        Oklch::from(Oklab::from(p3)).with_alpha(p3.alpha)
    }
}
