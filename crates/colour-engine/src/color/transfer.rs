//! sRGB transfer curve (IEC 61966-2-1), shared by sRGB and Display P3.
//!
//! Both directions are extended to negative inputs by mirroring the curve
//! around zero, so out-of-gamut values survive the trip through gamma space
//! and gamut detection can see them.

/// Decode a gamma-encoded channel to linear light.
#[inline]
pub fn srgb_to_linear(value: f64) -> f64 {
    let abs = value.abs();
    if abs <= 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light channel with the sRGB gamma curve.
#[inline]
pub fn linear_to_srgb(value: f64) -> f64 {
    let abs = value.abs();
    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        value * 12.92
    }
}
