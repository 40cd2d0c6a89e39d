//! Miette-based error diagnostics for CLI error presentation.
//!
//! Crate errors are mapped onto diagnostics with a stable code and, where
//! there is an obvious fix, a help line. Config parse failures carry the file
//! content and a labeled span.

use std::fmt::Display;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(marketcanon::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Diagnostic for a TOML parse failure in `src`.
    #[must_use]
    pub fn from_parse(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self {
            message: format!("failed to parse config: {}", err.message()),
            src: src.into(),
            span: err.span().map(|range| (range.start, range.len()).into()),
            help: Some("see the [logging], [specifiers], [validation] and [paths] tables".into()),
        }
    }
}

/// Any other command failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandError {
    /// Human-readable error message.
    pub message: String,

    /// Diagnostic code, e.g. `marketcanon::input`.
    pub code: &'static str,

    /// Optional help text with suggestions for fixing the error.
    pub help: Option<String>,
}

impl Diagnostic for CommandError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }
}

impl CommandError {
    /// Create a new command error.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&Error> for CommandError {
    fn from(err: &Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Config(ConfigError::ReadFile(_) | ConfigError::Parse(_)) => {
                Self::new("marketcanon::config", message)
                    .with_help("run `marketcanon config validate` for details")
            }
            Error::Config(_) => Self::new("marketcanon::config", message),
            Error::MissingFile { .. } => Self::new("marketcanon::input", message)
                .with_help("pass an existing path or a file name under paths.input_dir"),
            Error::InvalidShape(_) => Self::new("marketcanon::input", message)
                .with_help("the input must be a JSON array of market objects"),
            Error::Json(_) => Self::new("marketcanon::json", message),
            Error::Io(_) => Self::new("marketcanon::io", message),
            Error::Domain(DomainError::Identifier(_)) => Self::new("marketcanon::uid", message)
                .with_help("market UIDs are `event_type[_specifier]`, outcome UIDs add `_code`"),
            Error::Domain(_) => Self::new("marketcanon::domain", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_gets_input_code_and_help() {
        let err = Error::MissingFile {
            path: PathBuf::from("markets.json"),
        };
        let diag = CommandError::from(&err);
        assert_eq!(diag.code, "marketcanon::input");
        assert!(diag.message.contains("markets.json"));
        assert!(diag.help.is_some());
    }

    #[test]
    fn parse_diagnostic_points_into_source() {
        let src = "[logging]\nlevel = \n";
        let err = toml::from_str::<toml::Value>(src).unwrap_err();
        let diag = ConfigDiagnostic::from_parse(&err, src);
        assert!(diag.span.is_some());
        assert_eq!(diag.src, src);
    }
}
