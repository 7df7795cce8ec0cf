use serde::{Deserialize, Serialize};

use crate::color::Oklch;
use crate::error::FormatError;
use crate::format::build_display_colour;

/// One step of a shade ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeStep {
    /// Step name, as in `500` for the mid tone
    pub key: u16,
    /// Oklch lightness of the shade
    pub lightness: f64,
    /// Chroma weight of the shade
    pub chroma: f64,
}

impl ShadeStep {
    const fn new(key: u16, lightness: f64, chroma: f64) -> Self {
        Self {
            key,
            lightness,
            chroma,
        }
    }

    /// Apply this step to `base`, keeping its hue and alpha.
    ///
    /// `chroma_scale` multiplies the step's chroma weight; `invert` flips
    /// lightness for light colour schemes.
    pub fn apply(&self, base: &Oklch, chroma_scale: f64, invert: bool) -> Oklch {
        let l = if invert {
            1.0 - self.lightness
        } else {
            self.lightness
        };
        Oklch {
            l,
            c: self.chroma * chroma_scale,
            ..*base
        }
    }
}

/// The eleven shade steps from lightest (50) to darkest (950).
pub const SHADE_STEPS: [ShadeStep; 11] = [
    ShadeStep::new(50, 0.95, 0.02),
    ShadeStep::new(100, 0.90, 0.05),
    ShadeStep::new(200, 0.80, 0.10),
    ShadeStep::new(300, 0.72, 0.17),
    ShadeStep::new(400, 0.66, 0.22),
    ShadeStep::new(500, 0.50, 0.18),
    ShadeStep::new(600, 0.39, 0.14),
    ShadeStep::new(700, 0.28, 0.10),
    ShadeStep::new(800, 0.14, 0.05),
    ShadeStep::new(900, 0.09, 0.03),
    ShadeStep::new(950, 0.06, 0.02),
];

/// A generated palette colour with a stable identifier and its CSS value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub id: String,
    pub colour: Oklch,
    pub css: String,
}

impl PaletteEntry {
    pub(crate) fn render(id: String, colour: Oklch, wide_gamut: bool) -> Result<Self, FormatError> {
        let css = build_display_colour(&colour, wide_gamut)?;
        Ok(Self { id, colour, css })
    }
}

/// Shade ramp for a base colour, one entry per step in step order.
///
/// Each shade keeps the base hue and alpha and takes lightness and chroma
/// from its step. Identifiers are `base50`, `base100`, ... `base950`.
///
/// ```
/// use colour_engine::{generate_shade_ramp, Oklch, SHADE_STEPS};
///
/// let ramp = generate_shade_ramp(&Oklch::new(0.7, 0.15, 200.0), &SHADE_STEPS, false, true)?;
/// assert_eq!(ramp.len(), 11);
/// assert_eq!(ramp[5].id, "base500");
/// assert_eq!(ramp[5].css, "oklch(0.5 0.18 200)");
/// # Ok::<(), colour_engine::FormatError>(())
/// ```
pub fn generate_shade_ramp(
    base: &Oklch,
    steps: &[ShadeStep],
    invert: bool,
    wide_gamut: bool,
) -> Result<Vec<PaletteEntry>, FormatError> {
    base.validate()?;
    tracing::debug!(?base, invert, wide_gamut, steps = steps.len(), "generating shade ramp");
    steps
        .iter()
        .map(|step| {
            PaletteEntry::render(
                format!("base{}", step.key),
                step.apply(base, 1.0, invert),
                wide_gamut,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ramp_shape() {
        let base = Oklch::new(0.7, 0.15, 200.0).with_alpha(0.8);
        let ramp = generate_shade_ramp(&base, &SHADE_STEPS, false, true).unwrap();

        let ids: Vec<_> = ramp.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "base50", "base100", "base200", "base300", "base400", "base500", "base600",
                "base700", "base800", "base900", "base950"
            ]
        );
        for (entry, step) in ramp.iter().zip(SHADE_STEPS.iter()) {
            assert_eq!(entry.colour.l, step.lightness);
            assert_eq!(entry.colour.c, step.chroma);
            assert_eq!(entry.colour.h, Some(200.0));
            assert_eq!(entry.colour.alpha, 0.8);
        }
        assert_eq!(ramp[5].colour.c, 0.18);
    }

    #[test]
    fn test_invert_touches_lightness_only() {
        let base = Oklch::new(0.4, 0.1, 30.0);
        let normal = generate_shade_ramp(&base, &SHADE_STEPS, false, true).unwrap();
        let inverted = generate_shade_ramp(&base, &SHADE_STEPS, true, true).unwrap();

        for (a, b) in normal.iter().zip(inverted.iter()) {
            assert_eq!(a.id, b.id);
            assert!((a.colour.l + b.colour.l - 1.0).abs() < 1e-12);
            assert_eq!(a.colour.c, b.colour.c);
            assert_eq!(a.colour.h, b.colour.h);
        }
    }

    #[test]
    fn test_narrow_gamut_renders_rgb() {
        let ramp =
            generate_shade_ramp(&Oklch::new(0.5, 0.2, 140.0), &SHADE_STEPS, false, false).unwrap();
        assert!(ramp.iter().all(|e| e.css.starts_with("rgb(")));
    }

    #[test]
    fn test_custom_steps() {
        let steps = [ShadeStep::new(1, 0.3, 0.05)];
        let ramp = generate_shade_ramp(&Oklch::achromatic(0.5), &steps, false, true).unwrap();
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp[0].css, "oklch(0.3 0.05 0)");
    }

    #[test]
    fn test_non_finite_hue_is_an_error() {
        let base = Oklch::new(0.5, 0.1, f64::NAN);
        assert!(generate_shade_ramp(&base, &SHADE_STEPS, false, true).is_err());
    }

    /// Step chroma replaces the base chroma, so a NaN there would not reach
    /// any formatter on its own.
    #[test]
    fn test_non_finite_chroma_is_an_error() {
        let base = Oklch::new(0.5, f64::NAN, 200.0);
        assert!(matches!(
            generate_shade_ramp(&base, &SHADE_STEPS, false, true),
            Err(FormatError::NonFinite { component: "chroma", .. })
        ));
    }
}
