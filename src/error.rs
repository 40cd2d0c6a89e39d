use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::{ConversionError, DomainError, IdentifierFormatError, ValidationError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("invalid input shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Error::Domain(err.into())
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Domain(err.into())
    }
}

impl From<IdentifierFormatError> for Error {
    fn from(err: IdentifierFormatError) -> Self {
        Error::Domain(err.into())
    }
}
