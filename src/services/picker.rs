use colour_engine::{
    build_display_colour, classify, format_as, format_hex, format_hsl, format_oklch, format_rgb,
    generate_shade_ramp, nearest_name, to_hsl, to_rgb, ColourFormat, FormatError, Oklch,
    PaletteEntry, Space, SHADE_STEPS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{AppConfig, ColourScheme};

/// Partial colour change from one or more sliders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColourUpdate {
    pub l: Option<f64>,
    pub c: Option<f64>,
    pub h: Option<f64>,
}

impl ColourUpdate {
    pub fn lightness(l: f64) -> Self {
        Self {
            l: Some(l),
            ..Self::default()
        }
    }

    pub fn chroma(c: f64) -> Self {
        Self {
            c: Some(c),
            ..Self::default()
        }
    }

    pub fn hue(h: f64) -> Self {
        Self {
            h: Some(h),
            ..Self::default()
        }
    }
}

/// Text colour that stays readable on top of the current colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    pub fn for_background(colour: &Oklch) -> Self {
        if colour.l > 0.5 {
            Contrast::Black
        } else {
            Contrast::White
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Contrast::Black => "black",
            Contrast::White => "white",
        })
    }
}

/// Gradient end points for the three sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStops {
    /// Current colour at lightness 0.5
    pub lightness05: String,
    /// Current colour with no chroma
    pub chroma0: String,
    /// Current colour at chroma 0.4
    pub chroma04: String,
    /// Current colour at hue 0
    pub hue0: String,
}

/// Everything the picker shows for one colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteView {
    pub colour: Oklch,
    pub space: Space,
    /// CSS value used to paint the colour itself
    pub display: String,
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub oklch: String,
    /// Nearest CSS colour name, capitalized
    pub name: String,
    pub contrast: Contrast,
    /// `base50` .. `base950`, inverted for light schemes
    pub shades: Vec<PaletteEntry>,
    pub sliders: SliderStops,
}

impl PaletteView {
    /// The string for the active format.
    pub fn string_for(&self, format: ColourFormat) -> &str {
        match format {
            ColourFormat::Hex => &self.hex,
            ColourFormat::Rgb => &self.rgb,
            ColourFormat::Hsl => &self.hsl,
            ColourFormat::Oklch => &self.oklch,
        }
    }

    /// Look up a shade by identifier, e.g. `base950`.
    pub fn shade(&self, id: &str) -> Option<&PaletteEntry> {
        self.shades.iter().find(|entry| entry.id == id)
    }
}

/// Picker session state: the current colour plus display preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourPicker {
    colour: Oklch,
    format: ColourFormat,
    scheme: ColourScheme,
    system_prefers_dark: bool,
    wide_gamut: bool,
}

impl ColourPicker {
    pub fn new(colour: Oklch, wide_gamut: bool) -> Self {
        Self {
            colour,
            format: ColourFormat::default(),
            scheme: ColourScheme::default(),
            system_prefers_dark: true,
            wide_gamut,
        }
    }

    pub fn from_config(config: &AppConfig, colour: Oklch) -> Self {
        Self {
            format: config.format,
            scheme: config.scheme,
            ..Self::new(colour, config.wide_gamut)
        }
    }

    pub fn colour(&self) -> Oklch {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Oklch) {
        self.colour = colour;
    }

    /// Apply the components present in `update`, keeping the rest.
    pub fn update(&mut self, update: ColourUpdate) {
        if let Some(l) = update.l {
            self.colour.l = l;
        }
        if let Some(c) = update.c {
            self.colour.c = c;
        }
        if let Some(h) = update.h {
            self.colour.h = Some(h);
        }
        tracing::trace!(colour = ?self.colour, "Updated colour");
    }

    pub fn format(&self) -> ColourFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ColourFormat) {
        self.format = format;
    }

    pub fn scheme(&self) -> ColourScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColourScheme) {
        self.scheme = scheme;
    }

    /// Platform preference used to resolve [`ColourScheme::System`].
    pub fn set_system_prefers_dark(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
    }

    pub fn effective_scheme(&self) -> ColourScheme {
        self.scheme.effective(self.system_prefers_dark)
    }

    pub fn wide_gamut(&self) -> bool {
        self.wide_gamut
    }

    pub fn set_wide_gamut(&mut self, wide_gamut: bool) {
        self.wide_gamut = wide_gamut;
    }

    /// The current colour in the active format.
    pub fn current_string(&self) -> Result<String, FormatError> {
        format_as(&self.colour, self.format)
    }

    /// Recompute everything shown for the current colour.
    pub fn view(&self) -> Result<PaletteView, FormatError> {
        let colour = self.colour;
        let display = |c: Oklch| build_display_colour(&c, self.wide_gamut);
        let rgb = to_rgb(&colour);
        let invert = self.scheme.inverts_lightness(self.system_prefers_dark);

        Ok(PaletteView {
            colour,
            space: classify(&colour),
            display: display(colour)?,
            hex: format_hex(&rgb)?,
            rgb: format_rgb(&rgb)?,
            hsl: format_hsl(&to_hsl(&colour))?,
            oklch: format_oklch(&colour)?,
            name: capitalize(nearest_name(&colour)),
            contrast: Contrast::for_background(&colour),
            shades: generate_shade_ramp(&colour, &SHADE_STEPS, invert, self.wide_gamut)?,
            sliders: SliderStops {
                lightness05: display(colour.with_lightness(0.5))?,
                chroma0: display(colour.with_chroma(0.0))?,
                chroma04: display(colour.with_chroma(0.4))?,
                hue0: display(colour.with_hue(0.0))?,
            },
        })
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
