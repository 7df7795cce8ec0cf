//! Palettes derived from one base colour.
//!
//! A shade ramp walks the base hue through eleven fixed lightness and chroma
//! steps. A harmony rotates the hue and builds a ramp per rotation.

mod harmony;
mod shades;

pub use harmony::{generate_harmony, harmony_hues, HarmonyKind, PaletteStrip, HARMONY_REFERENCE_CHROMA};
pub use shades::{generate_shade_ramp, PaletteEntry, ShadeStep, SHADE_STEPS};
