use std::fmt;
use std::str::FromStr;

use colour_engine::ParseNameError;
use serde::{Deserialize, Serialize};

/// Colour scheme preference.
///
/// `System` follows the terminal or desktop preference, which the caller
/// supplies when resolving the effective scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourScheme {
    Light,
    Dark,
    #[default]
    System,
}

impl ColourScheme {
    pub const ALL: [ColourScheme; 3] = [ColourScheme::Light, ColourScheme::Dark, ColourScheme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ColourScheme::Light => "light",
            ColourScheme::Dark => "dark",
            ColourScheme::System => "system",
        }
    }

    /// Resolve `System` against the platform preference. Never returns `System`.
    pub fn effective(self, system_prefers_dark: bool) -> ColourScheme {
        match self {
            ColourScheme::System if system_prefers_dark => ColourScheme::Dark,
            ColourScheme::System => ColourScheme::Light,
            other => other,
        }
    }

    /// Whether shade ramps should run light-to-dark reversed.
    pub fn inverts_lightness(self, system_prefers_dark: bool) -> bool {
        self.effective(system_prefers_dark) == ColourScheme::Light
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColourScheme {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ColourScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == name)
            .ok_or_else(|| ParseNameError {
                kind: "colour scheme",
                value: s.to_string(),
                expected: "light, dark, system",
            })
    }
}
