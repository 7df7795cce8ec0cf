//! Assertion helpers for tests.

use colour_engine::{Oklab, Oklch, PaletteEntry};
use pretty_assertions::assert_eq;

/// Assert two colours are within `tolerance` in Oklab
pub fn assert_close(actual: &Oklch, expected: &Oklch, tolerance: f64) {
    let distance = Oklab::from(*actual).distance(Oklab::from(*expected));
    assert!(
        distance < tolerance,
        "Expected {expected:?}, got {actual:?} (distance {distance})"
    );
}

/// Assert a string is a CSS colour this crate produces
pub fn assert_css_colour(css: &str) {
    let known = ["#", "rgb(", "rgba(", "hsl(", "oklch("];
    assert!(
        known.iter().any(|prefix| css.starts_with(prefix)),
        "Expected a CSS colour, got {css:?}"
    );
    if !css.starts_with('#') {
        assert!(css.ends_with(')'), "Unterminated CSS colour {css:?}");
    }
}

/// Assert entries are the 11 `base*` shades in step order
pub fn assert_base_shades(entries: &[PaletteEntry]) {
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "base50", "base100", "base200", "base300", "base400", "base500", "base600", "base700",
            "base800", "base900", "base950",
        ]
    );
    for entry in entries {
        assert_css_colour(&entry.css);
    }
}
