//! colour-engine: the colour model behind the picker
//!
//! Everything here is a pure function of its inputs. The caller owns the
//! current colour; this crate classifies, converts, formats and derives
//! palettes from it.
//!
//! # Quick Start
//!
//! ```
//! use colour_engine::{classify, format_as, nearest_name, ColourFormat, Oklch, Space};
//!
//! let teal = Oklch::new(0.7, 0.1, 200.0);
//!
//! assert_eq!(classify(&teal), Space::Srgb);
//! assert_eq!(format_as(&teal, ColourFormat::Oklch).unwrap(), "oklch(0.7 0.1 200)");
//! assert!(format_as(&teal, ColourFormat::Hex).unwrap().starts_with('#'));
//! assert!(!nearest_name(&teal).is_empty());
//! ```
//!
//! # Colour Spaces
//!
//! - [`Oklch`]: canonical value, what the sliders edit
//! - [`Oklab`]: Cartesian form, used for distances
//! - [`Srgb`], [`Hsl`], [`DisplayP3`]: display projections
//! - [`LinearRgb`]: linear light pivot between Oklab and the RGB spaces
//!
//! # Gamut Handling
//!
//! [`classify`] reports whether a colour fits sRGB, only Display P3, or
//! neither. The converters ([`to_rgb`], [`to_hsl`], [`to_p3`]) never fail:
//! colours outside the target gamut lose chroma at constant hue and
//! lightness until clipping the remainder is no longer visible.
//!
//! ```text
//! Oklch --polar--> Oklab --M1/M2--> LinearRgb --transfer--> Srgb --> Hsl
//!                     \
//!                      +--XYZ--> linear P3 --transfer--> DisplayP3
//! ```
//!
//! # Palettes
//!
//! [`generate_shade_ramp`] produces eleven shades of one hue;
//! [`generate_harmony`] rotates the hue and builds a ramp per rotation.
//! Entries are rendered with [`build_display_colour`], which takes the
//! display's wide-gamut capability as an argument.

pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod gamut;
pub mod named;
pub mod palette;
pub mod random;


pub use color::{
    normalize_hue, ColourValue, DisplayP3, Hsl, LinearRgb, Oklab, Oklch, Srgb,
    ACHROMATIC_THRESHOLD,
};
pub use convert::{to_hsl, to_oklch, to_p3, to_rgb};
pub use error::{EngineError, FormatError, ParseHexError, ParseNameError};
pub use format::{
    build_display_colour, format_as, format_hex, format_hsl, format_oklch, format_rgb, round,
    ColourFormat,
};
pub use gamut::{classify, in_p3, in_srgb, Space, GAMUT_EPSILON};
pub use named::{lookup_name, nearest_name, NamedColourMatcher, CSS_NAMED_COLOURS};
pub use self::palette::{
    generate_harmony, generate_shade_ramp, harmony_hues, HarmonyKind, PaletteEntry, PaletteStrip,
    ShadeStep, HARMONY_REFERENCE_CHROMA, SHADE_STEPS,
};
pub use random::{sample_random, sample_with, Band, SamplerConfig};
