//! Decimal rounding and number printing for CSS output.

use std::fmt;

/// Round `value` half up to `precision` decimal places.
///
/// The value is first snapped to `precision` decimals in its decimal
/// representation so products like `0.07 * 100` (6.999999999999999) round
/// the way a person reading the number expects. Rounding twice gives the
/// same result as rounding once.
///
/// ```
/// use colour_engine::round;
///
/// assert_eq!(round(0.12345, 4), 0.1235);
/// assert_eq!(round(0.07 * 100.0, 0), 7.0);
/// assert_eq!(round(2.5, 0), 3.0);
/// ```
pub fn round(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    let snapped = if precision == 0 {
        scaled
    } else {
        format!("{scaled:.prec$}", prec = precision as usize)
            .parse()
            .unwrap_or(scaled)
    };
    (snapped + 0.5).floor() / factor
}

/// Shortest decimal form of a number: no trailing zeros, no exponent, and
/// negative zero printed as `0`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Shortest(pub f64);

impl fmt::Display for Shortest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
