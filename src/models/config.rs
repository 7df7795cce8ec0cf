use std::path::{Path, PathBuf};

use colour_engine::{ColourFormat, SamplerConfig};
use serde::Deserialize;

use super::ColourScheme;
use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "COLOURPICKER_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Output format for the current colour
    #[serde(default)]
    pub format: ColourFormat,

    /// Colour scheme preference
    #[serde(default)]
    pub scheme: ColourScheme,

    /// Whether the display can show colours outside sRGB
    #[serde(default)]
    pub wide_gamut: bool,

    /// JSON file the recent colours are kept in
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Random colour bands and nudges
    #[serde(default)]
    pub sampler: SamplerConfig,
}

fn default_history_file() -> PathBuf {
    PathBuf::from("recent_colours.json")
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `path`, or from [`CONFIG_ENV_VAR`] when no
    /// path is given. Falls back to defaults, with a warning, when the file
    /// cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(value) => PathBuf::from(value),
                None => {
                    tracing::debug!("No config file given, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::read(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    format = %config.format,
                    scheme = %config.scheme,
                    wide_gamut = config.wide_gamut,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: ColourFormat::Oklch,
            scheme: ColourScheme::System,
            wide_gamut: false,
            history_file: default_history_file(),
            sampler: SamplerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_engine::Band;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.format, ColourFormat::Oklch);
        assert_eq!(config.scheme, ColourScheme::System);
        assert!(!config.wide_gamut);
        assert_eq!(config.history_file, PathBuf::from("recent_colours.json"));
        assert_eq!(config.sampler, SamplerConfig::default());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
format: hex
scheme: dark
wide_gamut: true
history_file: /tmp/colours.json
sampler:
  lightness:
    min: 0.4
    max: 0.6
  chroma_nudge: 0.0
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.format, ColourFormat::Hex);
        assert_eq!(config.scheme, ColourScheme::Dark);
        assert!(config.wide_gamut);
        assert_eq!(config.history_file, PathBuf::from("/tmp/colours.json"));
        assert_eq!(config.sampler.lightness, Band::new(0.4, 0.6));
        assert_eq!(config.sampler.chroma_nudge, 0.0);
        assert_eq!(config.sampler.lightness_nudge, 0.02);
    }

    #[test]
    fn test_invalid_format_is_error() {
        assert!(AppConfig::from_yaml_str("format: cmyk").is_err());
    }

    #[test]
    fn test_load_falls_back_on_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scheme: [not, a, scheme]").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/colourpicker.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: rgb").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.format, ColourFormat::Rgb);
    }
}
