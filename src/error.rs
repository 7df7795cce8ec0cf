use std::path::PathBuf;

use colour_engine::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Empty colour input")]
    Empty,

    #[error("Unrecognised colour: {0}")]
    Unrecognised(String),

    #[error("Invalid {component} in {input}: {reason}")]
    Component {
        input: String,
        component: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from the CLI commands
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
