//! CSS string formatting.
//!
//! All numbers go through [`round`] so the same colour always renders to
//! the same string. Formatters only fail on NaN or infinite components.

mod css;
mod round;

pub use css::{
    build_display_colour, format_as, format_hex, format_hsl, format_oklch, format_rgb,
    ColourFormat,
};
pub use round::round;
pub(crate) use round::Shortest;
