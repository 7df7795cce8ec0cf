use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::round::{round, Shortest};
use crate::color::{check_finite, Hsl, Oklch, Srgb};
use crate::convert::{to_hsl, to_rgb};
use crate::error::{FormatError, ParseNameError};

/// Output notation for a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourFormat {
    Hex,
    Rgb,
    Hsl,
    #[default]
    Oklch,
}

impl ColourFormat {
    pub const ALL: [ColourFormat; 4] = [
        ColourFormat::Hex,
        ColourFormat::Rgb,
        ColourFormat::Hsl,
        ColourFormat::Oklch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColourFormat::Hex => "hex",
            ColourFormat::Rgb => "rgb",
            ColourFormat::Hsl => "hsl",
            ColourFormat::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColourFormat {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ColourFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == name)
            .ok_or_else(|| ParseNameError {
                kind: "colour format",
                value: s.to_string(),
                expected: "hex, rgb, hsl, oklch",
            })
    }
}

fn alpha_suffix(alpha: f64) -> String {
    if alpha < 1.0 {
        format!(" / {}%", Shortest(round(100.0 * alpha, 2)))
    } else {
        String::new()
    }
}

fn check_rgb(rgb: &Srgb) -> Result<(), FormatError> {
    check_finite("red", rgb.r)?;
    check_finite("green", rgb.g)?;
    check_finite("blue", rgb.b)?;
    check_finite("alpha", rgb.alpha)
}

/// `rgb(r, g, b)` with integer channels, or `rgba(r, g, b, a)` when
/// translucent. Alpha is printed as given.
///
/// ```
/// use colour_engine::{format_rgb, Srgb};
///
/// assert_eq!(format_rgb(&Srgb::new(1.0, 0.0, 0.0)).unwrap(), "rgb(255, 0, 0)");
/// assert_eq!(
///     format_rgb(&Srgb::new(1.0, 0.0, 0.0).with_alpha(0.5)).unwrap(),
///     "rgba(255, 0, 0, 0.5)"
/// );
/// ```
pub fn format_rgb(rgb: &Srgb) -> Result<String, FormatError> {
    check_rgb(rgb)?;
    let r = Shortest(round(255.0 * rgb.r, 0));
    let g = Shortest(round(255.0 * rgb.g, 0));
    let b = Shortest(round(255.0 * rgb.b, 0));
    Ok(if rgb.alpha < 1.0 {
        format!("rgba({r}, {g}, {b}, {})", Shortest(rgb.alpha))
    } else {
        format!("rgb({r}, {g}, {b})")
    })
}

/// `hsl(h s% l%)`, hue to two decimals and percentages as integers.
///
/// An undefined hue prints as 0 and an undefined saturation as 100%.
pub fn format_hsl(hsl: &Hsl) -> Result<String, FormatError> {
    let h = hsl.h.unwrap_or(0.0);
    let s = hsl.s.map_or(100.0, |s| s * 100.0);
    check_finite("hue", h)?;
    check_finite("saturation", s)?;
    check_finite("lightness", hsl.l)?;
    check_finite("alpha", hsl.alpha)?;

    Ok(format!(
        "hsl({} {}% {}%{})",
        Shortest(round(h, 2)),
        Shortest(round(s, 0)),
        Shortest(round(hsl.l * 100.0, 0)),
        alpha_suffix(hsl.alpha)
    ))
}

/// `oklch(l c h)` with lightness and chroma to four decimals and hue to two.
///
/// Hue is printed as stored, without wrapping; an undefined hue prints as 0.
///
/// ```
/// use colour_engine::{format_oklch, Oklch};
///
/// let colour = Oklch::new(0.70004, 0.15, 200.0).with_alpha(0.5);
/// assert_eq!(format_oklch(&colour).unwrap(), "oklch(0.7 0.15 200 / 50%)");
/// ```
pub fn format_oklch(colour: &Oklch) -> Result<String, FormatError> {
    colour.validate()?;
    Ok(format!(
        "oklch({} {} {}{})",
        Shortest(round(colour.l, 4)),
        Shortest(round(colour.c, 4)),
        Shortest(round(colour.h.unwrap_or(0.0), 2)),
        alpha_suffix(colour.alpha)
    ))
}

/// Lower-case `#rrggbb`, or `#rrggbbaa` when translucent.
///
/// Channels are clamped; pass a gamut-mapped colour from [`to_rgb`] to keep
/// the hue of out-of-gamut input.
pub fn format_hex(rgb: &Srgb) -> Result<String, FormatError> {
    check_rgb(rgb)?;
    let [r, g, b] = [rgb.r, rgb.g, rgb.b].map(to_byte);
    let mut hex = format!("#{r:02x}{g:02x}{b:02x}");
    if rgb.alpha < 1.0 {
        hex.push_str(&format!("{:02x}", to_byte(rgb.alpha)));
    }
    Ok(hex)
}

/// Half-up, like every other notation, then clamped.
fn to_byte(channel: f64) -> u8 {
    round(255.0 * channel, 0).clamp(0.0, 255.0) as u8
}

/// Gamut-map a colour to whatever `format` needs and render it.
pub fn format_as(colour: &Oklch, format: ColourFormat) -> Result<String, FormatError> {
    match format {
        ColourFormat::Hex => format_hex(&to_rgb(colour)),
        ColourFormat::Rgb => format_rgb(&to_rgb(colour)),
        ColourFormat::Hsl => format_hsl(&to_hsl(colour)),
        ColourFormat::Oklch => format_oklch(colour),
    }
}

/// CSS value for showing a colour on screen.
///
/// With wide-gamut support the raw `oklch()` string is used and the display
/// does its own mapping; otherwise the colour is mapped into sRGB here.
pub fn build_display_colour(colour: &Oklch, wide_gamut: bool) -> Result<String, FormatError> {
    if wide_gamut {
        format_oklch(colour)
    } else {
        format_rgb(&to_rgb(colour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_rgb() {
        assert_eq!(
            format_rgb(&Srgb::new(0.2, 0.4, 0.6)).unwrap(),
            "rgb(51, 102, 153)"
        );
        assert_eq!(
            format_rgb(&Srgb::new(0.0, 0.5, 1.0).with_alpha(0.25)).unwrap(),
            "rgba(0, 128, 255, 0.25)"
        );
    }

    #[test]
    fn test_format_rgb_rejects_nan() {
        let error = format_rgb(&Srgb::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            error,
            FormatError::NonFinite {
                component: "red",
                ..
            }
        ));
    }

    #[test]
    fn test_format_hsl() {
        assert_eq!(
            format_hsl(&Hsl::new(210.0, 0.5, 0.4)).unwrap(),
            "hsl(210 50% 40%)"
        );
        assert_eq!(
            format_hsl(&Hsl::new(12.345, 0.123, 0.456).with_alpha(0.333)).unwrap(),
            "hsl(12.35 12% 46% / 33.3%)"
        );
    }

    #[test]
    fn test_format_hsl_missing_components() {
        let grey = Hsl {
            h: None,
            s: None,
            l: 0.5,
            alpha: 1.0,
        };
        assert_eq!(format_hsl(&grey).unwrap(), "hsl(0 100% 50%)");

        let black = Hsl {
            h: None,
            s: Some(0.0),
            l: 0.0,
            alpha: 1.0,
        };
        assert_eq!(format_hsl(&black).unwrap(), "hsl(0 0% 0%)");
    }

    #[test]
    fn test_format_oklch() {
        assert_eq!(
            format_oklch(&Oklch::new(0.5, 0.18, 200.0)).unwrap(),
            "oklch(0.5 0.18 200)"
        );
        assert_eq!(
            format_oklch(&Oklch::new(0.123456, 0.0, 359.996)).unwrap(),
            "oklch(0.1235 0 360)"
        );
        assert_eq!(
            format_oklch(&Oklch::achromatic(1.0)).unwrap(),
            "oklch(1 0 0)"
        );
    }

    #[test]
    fn test_format_oklch_keeps_raw_hue() {
        assert_eq!(
            format_oklch(&Oklch::new(0.5, 0.1, -30.0)).unwrap(),
            "oklch(0.5 0.1 -30)"
        );
    }

    #[test]
    fn test_format_oklch_rejects_non_finite() {
        let error = format_oklch(&Oklch::new(0.5, f64::INFINITY, 10.0)).unwrap_err();
        assert!(matches!(
            error,
            FormatError::NonFinite {
                component: "chroma",
                ..
            }
        ));
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&Srgb::from_u8(255, 0, 128)).unwrap(), "#ff0080");
        assert_eq!(
            format_hex(&Srgb::from_u8(255, 0, 128).with_alpha(0.5)).unwrap(),
            "#ff008080"
        );
    }

    #[test]
    fn test_hex_and_rgb_round_alike() {
        for step in 0..=1000 {
            let v = step as f64 / 1000.0;
            let rgb = Srgb::new(v, 1.0 - v, 0.5).with_alpha(v.min(0.999));
            let hex = format_hex(&rgb).unwrap();
            let css = format_rgb(&rgb).unwrap();

            let bytes: Vec<u8> = (0..4)
                .map(|i| u8::from_str_radix(&hex[1 + 2 * i..3 + 2 * i], 16).unwrap())
                .collect();
            let expected = format!("rgba({}, {}, {}, ", bytes[0], bytes[1], bytes[2]);
            assert!(css.starts_with(&expected), "{hex} vs {css}");
            assert_eq!(bytes[3] as f64, round(255.0 * rgb.alpha, 0), "{hex}");
        }
    }

    #[test]
    fn test_format_is_deterministic() {
        let colour = Oklch::new(0.62, 0.19, 33.3);
        for format in ColourFormat::ALL {
            assert_eq!(
                format_as(&colour, format).unwrap(),
                format_as(&colour, format).unwrap()
            );
        }
    }

    #[test]
    fn test_format_as_maps_into_gamut() {
        let vivid = Oklch::new(0.6, 0.4, 140.0);
        let rgb = format_as(&vivid, ColourFormat::Rgb).unwrap();
        assert!(rgb.starts_with("rgb("), "{rgb}");
        assert_eq!(format_as(&vivid, ColourFormat::Oklch).unwrap(), "oklch(0.6 0.4 140)");
    }

    #[test]
    fn test_colour_format_parse_and_display() {
        assert_eq!("HEX".parse::<ColourFormat>().unwrap(), ColourFormat::Hex);
        assert_eq!(" oklch ".parse::<ColourFormat>().unwrap(), ColourFormat::Oklch);
        assert_eq!(ColourFormat::Hsl.to_string(), "hsl");

        let error = "cmyk".parse::<ColourFormat>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown colour format 'cmyk' (expected one of: hex, rgb, hsl, oklch)"
        );
    }

    #[test]
    fn test_build_display_colour() {
        let colour = Oklch::from(Srgb::from_u8(51, 102, 153));
        assert_eq!(
            build_display_colour(&colour, false).unwrap(),
            "rgb(51, 102, 153)"
        );
        assert!(build_display_colour(&colour, true)
            .unwrap()
            .starts_with("oklch("));
    }
}
