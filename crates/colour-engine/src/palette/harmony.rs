use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::shades::{PaletteEntry, SHADE_STEPS};
use crate::color::{normalize_hue, Oklch};
use crate::error::{FormatError, ParseNameError};
use crate::format::Shortest;

/// Chroma at which harmony ramps use the full step weights.
pub const HARMONY_REFERENCE_CHROMA: f64 = 0.22;

/// How the hues of a harmony are rotated from the base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// The base hue alone.
    #[default]
    Monochromatic,
    /// Base hue and its opposite.
    Complementary,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Base hue flanked by its 30 degree neighbours.
    Analogous,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 4] = [
        HarmonyKind::Monochromatic,
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Analogous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyKind::Monochromatic => "monochromatic",
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
        }
    }

    /// Hue offsets in degrees, in output order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyKind::Monochromatic => &[0.0],
            HarmonyKind::Complementary => &[0.0, 180.0],
            HarmonyKind::Triadic => &[0.0, 120.0, 240.0],
            HarmonyKind::Analogous => &[-30.0, 0.0, 30.0],
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        HarmonyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ParseNameError {
                kind: "harmony",
                value: s.to_string(),
                expected: "monochromatic, complementary, triadic, analogous",
            })
    }
}

/// One rotated hue and its shade ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteStrip {
    pub hue: Option<f64>,
    pub entries: Vec<PaletteEntry>,
}

/// Rotated hues for `kind`, each wrapped into `[0, 360)`.
///
/// A colour without a hue has nothing to rotate and yields a single `None`.
pub fn harmony_hues(base: &Oklch, kind: HarmonyKind) -> Vec<Option<f64>> {
    match base.h {
        None => vec![None],
        Some(h) => kind
            .offsets()
            .iter()
            .map(|offset| Some(normalize_hue(h + offset)))
            .collect(),
    }
}

/// Harmony strips for a base colour, in rotation order.
///
/// Each strip is a shade ramp at one rotated hue. Step chroma weights are
/// scaled by `min(c / 0.22, 1)` so muted bases give muted palettes.
/// Identifiers read `{kind}-{hue}-{step}`, with `none` for a missing hue.
/// A base with a non-finite component is rejected.
pub fn generate_harmony(
    base: &Oklch,
    kind: HarmonyKind,
    wide_gamut: bool,
) -> Result<Vec<PaletteStrip>, FormatError> {
    base.validate()?;
    let chroma_scale = (base.c / HARMONY_REFERENCE_CHROMA).min(1.0);
    tracing::debug!(?base, %kind, chroma_scale, wide_gamut, "generating harmony");

    harmony_hues(base, kind)
        .into_iter()
        .map(|hue| {
            let rotated = Oklch { h: hue, ..*base };
            let label = hue.map_or_else(|| "none".to_string(), |h| Shortest(h).to_string());
            let entries = SHADE_STEPS
                .iter()
                .map(|step| {
                    PaletteEntry::render(
                        format!("{kind}-{label}-{}", step.key),
                        step.apply(&rotated, chroma_scale, false),
                        wide_gamut,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PaletteStrip { hue, entries })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hue_gap(a: f64, b: f64) -> f64 {
        normalize_hue(b - a)
    }

    #[test]
    fn test_strip_counts() {
        let base = Oklch::new(0.6, 0.1, 50.0);
        for (kind, strips) in [
            (HarmonyKind::Monochromatic, 1),
            (HarmonyKind::Complementary, 2),
            (HarmonyKind::Triadic, 3),
            (HarmonyKind::Analogous, 3),
        ] {
            let harmony = generate_harmony(&base, kind, true).unwrap();
            assert_eq!(harmony.len(), strips, "{kind}");
            assert!(harmony.iter().all(|strip| strip.entries.len() == 11));
        }
    }

    #[test]
    fn test_complementary_is_opposite() {
        let hues = harmony_hues(&Oklch::new(0.6, 0.1, 300.0), HarmonyKind::Complementary);
        assert_eq!(hues, vec![Some(300.0), Some(120.0)]);
        assert_eq!(hue_gap(300.0, 120.0), 180.0);
    }

    #[test]
    fn test_triadic_spacing() {
        let hues: Vec<f64> = harmony_hues(&Oklch::new(0.6, 0.1, 10.0), HarmonyKind::Triadic)
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(hues, vec![10.0, 130.0, 250.0]);
        assert_eq!(hue_gap(hues[0], hues[1]), 120.0);
        assert_eq!(hue_gap(hues[1], hues[2]), 120.0);
    }

    #[test]
    fn test_analogous_wraps() {
        let hues = harmony_hues(&Oklch::new(0.6, 0.1, 10.0), HarmonyKind::Analogous);
        assert_eq!(hues, vec![Some(340.0), Some(10.0), Some(40.0)]);
    }

    #[test]
    fn test_out_of_range_base_hue_is_wrapped() {
        let hues = harmony_hues(&Oklch::new(0.6, 0.1, 370.0), HarmonyKind::Monochromatic);
        assert_eq!(hues, vec![Some(10.0)]);
    }

    #[test]
    fn test_achromatic_collapses_to_one_strip() {
        let grey = Oklch::achromatic(0.5);
        let harmony = generate_harmony(&grey, HarmonyKind::Triadic, true).unwrap();
        assert_eq!(harmony.len(), 1);
        assert_eq!(harmony[0].hue, None);
        assert_eq!(harmony[0].entries[0].id, "triadic-none-50");
        // Zero base chroma scales every step to grey.
        assert!(harmony[0].entries.iter().all(|e| e.colour.c == 0.0));
    }

    #[test]
    fn test_chroma_scaling() {
        let base = Oklch::new(0.7, 0.15, 200.0);
        let strip = &generate_harmony(&base, HarmonyKind::Monochromatic, true).unwrap()[0];
        let step500 = &strip.entries[5];
        assert_eq!(step500.id, "monochromatic-200-500");
        assert_eq!(step500.colour.l, 0.5);
        assert!((step500.colour.c - 0.18 * 0.15 / 0.22).abs() < 1e-12);

        let vivid = Oklch::new(0.7, 0.3, 200.0);
        let strip = &generate_harmony(&vivid, HarmonyKind::Monochromatic, true).unwrap()[0];
        assert_eq!(strip.entries[5].colour.c, 0.18);
    }

    #[test]
    fn test_non_finite_chroma_is_an_error() {
        let base = Oklch::new(0.7, f64::NAN, 200.0);
        for kind in HarmonyKind::ALL {
            assert!(matches!(
                generate_harmony(&base, kind, true),
                Err(FormatError::NonFinite { component: "chroma", .. })
            ));
        }
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Triadic".parse::<HarmonyKind>().unwrap(), HarmonyKind::Triadic);
        assert!("square".parse::<HarmonyKind>().is_err());
        assert_eq!(
            serde_json::to_string(&HarmonyKind::Analogous).unwrap(),
            "\"analogous\""
        );
    }
}
