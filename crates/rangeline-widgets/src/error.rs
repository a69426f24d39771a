//! Error types for rangeline-widgets.

use rangeline_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading or validating a slider configuration.
///
/// The live widget never fails: it clamps. Only configuration input is
/// rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string was not valid hex.
    #[error("Invalid color for '{field}': {source}")]
    Color {
        /// Field name
        field: &'static str,
        /// Underlying parse error
        source: ColorParseError,
    },

    /// A value is out of range or not a number.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}
