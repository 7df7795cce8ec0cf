//! Error types for the colour engine.
//!
//! Conversions are total and never fail. Errors only come from formatting
//! values that break the colour contract and from parsing hex strings or
//! enum names.
//! [`EngineError`] wraps both for `?` propagation in application code.

use thiserror::Error;

/// A colour component that cannot be rendered as text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// NaN or infinite component
    #[error("invalid colour: {component} is not a finite number ({value})")]
    NonFinite {
        /// Which component failed (`lightness`, `chroma`, `hue`, `alpha`, `red`, ...)
        component: &'static str,
        /// The offending value
        value: f64,
    },
}

/// Error type for parsing hex colour strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseHexError {
    /// Hex string has invalid length (must be 3, 4, 6 or 8 digits after stripping '#')
    #[error("invalid hex colour length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit, signs included
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

/// A name that matches none of an enum's variants.
///
/// Returned by the `FromStr` impls of [`crate::ColourFormat`] and
/// [`crate::HarmonyKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Unified error type for the colour engine public API.
///
/// # Example
///
/// ```
/// use colour_engine::{format_hex, EngineError, Srgb};
///
/// fn normalize(input: &str) -> Result<String, EngineError> {
///     let rgb: Srgb = input.parse()?;
///     Ok(format_hex(&rgb)?)
/// }
///
/// assert_eq!(normalize("#ABC").unwrap(), "#aabbcc");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("hex parse error: {0}")]
    ParseHex(#[from] ParseHexError),
    #[error(transparent)]
    ParseName(#[from] ParseNameError),
}
