//! Parsing colours typed by the user.
//!
//! Accepted forms:
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `oklch(l c h)`, with optional `/ alpha`; lightness may be a percentage
//! - `rgb(r, g, b)`, `rgba(r, g, b, a)` and the space-separated CSS 4 form
//! - `hsl(h s% l%)` and `hsla(...)`
//! - a bare `l c h` triple, as typed next to the sliders
//! - a CSS named colour such as `rebeccapurple`
//! - any of the above as a declaration value, e.g. `color: #336699;`

use std::sync::LazyLock;

use colour_engine::{lookup_name, Hsl, Oklch, Srgb};
use regex::Regex;

use crate::error::InputError;

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_-][\w-]*\s*:\s*(?P<value>.+?)\s*;?$").expect("valid regex")
});

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>oklch|rgba?|hsla?)\(\s*(?P<args>[^()]*?)\s*\)$")
        .expect("valid regex")
});

/// Chroma that `100%` stands for in `oklch()`.
const OKLCH_CHROMA_PERCENT_REFERENCE: f64 = 0.4;

/// Parse a colour string into an Oklch value.
///
/// ```
/// use colourpicker::input::parse_colour;
///
/// let colour = parse_colour("oklch(0.7 0.15 200)").unwrap();
/// assert_eq!((colour.l, colour.c, colour.h), (0.7, 0.15, Some(200.0)));
///
/// assert!(parse_colour("color: #336699;").is_ok());
/// assert!(parse_colour("not a colour").is_err());
/// ```
pub fn parse_colour(input: &str) -> Result<Oklch, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = match DECLARATION_RE.captures(trimmed) {
        Some(caps) => caps.name("value").map_or(trimmed, |m| m.as_str()),
        None => trimmed.trim_end_matches(';').trim_end(),
    };

    let colour = parse_value(input, value)?;
    tracing::debug!(input = %trimmed, ?colour, "Parsed colour");
    Ok(colour)
}

fn parse_value(input: &str, value: &str) -> Result<Oklch, InputError> {
    if value.starts_with('#') {
        let rgb: Srgb = value.parse().map_err(|e| InputError::Component {
            input: input.to_string(),
            component: "hex",
            reason: format!("{e}"),
        })?;
        return Ok(Oklch::from(rgb));
    }

    if let Some(caps) = FUNCTION_RE.captures(value) {
        let name = caps["name"].to_ascii_lowercase();
        let args = Args::split(input, &caps["args"])?;
        return match name.as_str() {
            "oklch" => args.oklch(),
            "rgb" | "rgba" => args.rgb(),
            _ => args.hsl(),
        };
    }

    if let Some(rgb) = lookup_name(value) {
        return Ok(Oklch::from(rgb));
    }

    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() == 3 && parts.iter().all(|p| p.parse::<f64>().is_ok()) {
        return Args::split(input, value)?.oklch();
    }

    Err(InputError::Unrecognised(input.trim().to_string()))
}

/// Arguments of a CSS colour function, split into channels and alpha.
struct Args<'a> {
    input: &'a str,
    channels: Vec<&'a str>,
    alpha: Option<&'a str>,
}

impl<'a> Args<'a> {
    fn split(input: &'a str, args: &'a str) -> Result<Self, InputError> {
        let (channels, alpha) = if let Some((channels, alpha)) = args.split_once('/') {
            (channels.split_whitespace().collect::<Vec<_>>(), Some(alpha.trim()))
        } else if args.contains(',') {
            let mut parts: Vec<_> = args.split(',').map(str::trim).collect();
            let alpha = if parts.len() == 4 { parts.pop() } else { None };
            (parts, alpha)
        } else {
            (args.split_whitespace().collect(), None)
        };

        if channels.len() != 3 {
            return Err(InputError::Component {
                input: input.to_string(),
                component: "arguments",
                reason: format!("expected 3 channels, found {}", channels.len()),
            });
        }
        Ok(Self {
            input,
            channels,
            alpha,
        })
    }

    fn invalid(&self, component: &'static str, reason: impl Into<String>) -> InputError {
        InputError::Component {
            input: self.input.to_string(),
            component,
            reason: reason.into(),
        }
    }

    /// Number with an optional `%` suffix, as `(value, is_percent)`.
    fn number(&self, component: &'static str, token: &str) -> Result<(f64, bool), InputError> {
        let (digits, percent) = match token.strip_suffix('%') {
            Some(digits) => (digits, true),
            None => (token, false),
        };
        let value: f64 = digits
            .parse()
            .map_err(|_| self.invalid(component, format!("'{token}' is not a number")))?;
        if !value.is_finite() {
            return Err(self.invalid(component, format!("'{token}' is not finite")));
        }
        Ok((value, percent))
    }

    fn hue(&self, token: &str) -> Result<Option<f64>, InputError> {
        if token.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        let digits = token.strip_suffix("deg").unwrap_or(token);
        match self.number("hue", digits)? {
            (_, true) => Err(self.invalid("hue", "percentages are not allowed")),
            (h, false) => Ok(Some(h)),
        }
    }

    fn alpha(&self) -> Result<f64, InputError> {
        let Some(token) = self.alpha else {
            return Ok(1.0);
        };
        let (value, percent) = self.number("alpha", token)?;
        let alpha = if percent { value / 100.0 } else { value };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(self.invalid("alpha", "must be between 0 and 1"));
        }
        Ok(alpha)
    }

    fn oklch(&self) -> Result<Oklch, InputError> {
        let l = match self.number("lightness", self.channels[0])? {
            (l, true) => l / 100.0,
            (l, false) => l,
        };
        let c = match self.number("chroma", self.channels[1])? {
            (c, true) => c / 100.0 * OKLCH_CHROMA_PERCENT_REFERENCE,
            (c, false) => c,
        };
        if c < 0.0 {
            return Err(self.invalid("chroma", "must not be negative"));
        }
        let h = self.hue(self.channels[2])?;
        Ok(Oklch {
            l,
            c,
            h,
            alpha: self.alpha()?,
        })
    }

    fn rgb(&self) -> Result<Oklch, InputError> {
        const NAMES: [&str; 3] = ["red", "green", "blue"];
        let mut rgb = [0.0; 3];
        for (i, name) in NAMES.into_iter().enumerate() {
            let value = match self.number(name, self.channels[i])? {
                (v, true) => v / 100.0,
                (v, false) => v / 255.0,
            };
            if !(0.0..=1.0).contains(&value) {
                return Err(self.invalid(name, "must be between 0 and 255"));
            }
            rgb[i] = value;
        }
        let [r, g, b] = rgb;
        Ok(Oklch::from(Srgb::new(r, g, b).with_alpha(self.alpha()?)))
    }

    fn hsl(&self) -> Result<Oklch, InputError> {
        let h = self.hue(self.channels[0])?;
        let s = self.percentage("saturation", self.channels[1])?;
        let l = self.percentage("lightness", self.channels[2])?;
        Ok(Oklch::from(Hsl {
            h,
            s: Some(s),
            l,
            alpha: self.alpha()?,
        }))
    }

    fn percentage(&self, component: &'static str, token: &str) -> Result<f64, InputError> {
        let (value, percent) = self.number(component, token)?;
        if !percent {
            return Err(self.invalid(component, "must be a percentage"));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(self.invalid(component, "must be between 0% and 100%"));
        }
        Ok(value / 100.0)
    }
}
