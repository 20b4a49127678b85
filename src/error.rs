// Error types module

use thiserror::Error;

/// Errors produced while resolving or validating request parameters
///
/// All three are client-input errors and terminal for the request. Mapping
/// them to a response is left to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// Missing or non-integer size, or a dimension over the ceiling
    #[error("Invalid size")]
    InvalidSize,

    /// Blur requested with an intensity outside the accepted range
    #[error("Invalid blur amount")]
    InvalidBlurAmount,

    /// Extension is not one of the served formats
    #[error("Invalid file extension")]
    InvalidFileExtension,
}

impl ParamsError {
    /// Stable identifier suitable for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ParamsError::InvalidSize => "invalid_size",
            ParamsError::InvalidBlurAmount => "invalid_blur_amount",
            ParamsError::InvalidFileExtension => "invalid_file_extension",
        }
    }
}

/// Errors that can occur while loading a [`crate::config::ParamsConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' is referenced but not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
