//! Test fixtures and constants.

use colour_engine::Oklch;

/// Colour strings in every accepted notation
pub mod inputs {
    pub const HEX: &str = "#336699";
    pub const HEX_SHORT: &str = "#369";
    pub const OKLCH: &str = "oklch(0.7 0.15 200)";
    pub const RGB: &str = "rgb(51, 102, 153)";
    pub const HSL: &str = "hsl(210 50% 40%)";
    pub const TRIPLE: &str = "0.7 0.15 200";
    pub const DECLARATION: &str = "background-color: #336699;";
    pub const NAMED: &str = "steelblue";
}

/// The teal used in the end-to-end palette scenario
pub fn teal() -> Oklch {
    Oklch::new(0.7, 0.15, 200.0)
}

/// A colour comfortably inside sRGB
pub fn slate() -> Oklch {
    Oklch::new(0.55, 0.08, 250.0)
}

/// Vivid green outside both sRGB and Display P3
pub fn vivid_green() -> Oklch {
    Oklch::new(0.6, 0.4, 140.0)
}

/// `count` distinct colours with hues 10 degrees apart
pub fn hue_sweep(count: usize) -> Vec<Oklch> {
    (0..count)
        .map(|i| Oklch::new(0.6, 0.1, 10.0 * i as f64))
        .collect()
}
