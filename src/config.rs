//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Every section is optional; a missing
//! file section falls back to its defaults, and running without any file is
//! equivalent to an empty one.
//!
//! # Example
//!
//! ```no_run
//! use marketcanon::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("marketcanon.toml")?;
//!     config.init_logging();
//!     let converter = config.converter();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::normalize::{is_handicap_value, is_total_value};
use crate::domain::{MarketConverter, SpecifierDefaults, ValidationPolicy};
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "marketcanon.toml";

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays clean for command output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Named starting point for the validation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPreset {
    /// Unconditional checks only.
    #[default]
    Lenient,
    /// Every optional check on.
    Strict,
}

impl ValidationPreset {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Validation settings: a preset plus per-key overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub preset: ValidationPreset,
    pub enforce_uid_shape: Option<bool>,
    pub require_numeric_event_id: Option<bool>,
    pub max_name_length: Option<usize>,
    pub max_outcome_count: Option<usize>,
    pub max_odds: Option<Decimal>,
}

impl ValidationConfig {
    /// Policy from the preset with any explicit keys applied on top.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        let base = match self.preset {
            ValidationPreset::Lenient => ValidationPolicy::lenient(),
            ValidationPreset::Strict => ValidationPolicy::strict(),
        };
        ValidationPolicy {
            enforce_uid_shape: self.enforce_uid_shape.unwrap_or(base.enforce_uid_shape),
            require_numeric_event_id: self
                .require_numeric_event_id
                .unwrap_or(base.require_numeric_event_id),
            max_name_length: self.max_name_length.or(base.max_name_length),
            max_outcome_count: self.max_outcome_count.or(base.max_outcome_count),
            max_odds: self.max_odds.or(base.max_odds),
        }
    }
}

/// Where input files are looked up and output files are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Fallback directory for input names that do not resolve as given.
    pub input_dir: PathBuf,
    /// Directory for converted files when no output path is given.
    pub output_dir: PathBuf,
    /// Appended to the input file stem to name the output file.
    pub output_suffix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input_files"),
            output_dir: PathBuf::from("output_files"),
            output_suffix: "_output".into(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Specifier values used when outcome labels carry no number.
    #[serde(default)]
    pub specifiers: SpecifierDefaults,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::MissingField`] / [`ConfigError::InvalidValue`] when a
    /// value fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] if the file cannot be read, otherwise
    /// the same errors as [`Config::parse_toml`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let total = &self.specifiers.total_default;
        if total.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "total_default",
            }
            .into());
        }
        if !is_total_value(total) {
            return Err(ConfigError::InvalidValue {
                field: "total_default",
                reason: format!("'{total}' is not an unsigned decimal number"),
            }
            .into());
        }

        let handicap = &self.specifiers.handicap_default;
        if handicap.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "handicap_default",
            }
            .into());
        }
        if !is_handicap_value(handicap) {
            return Err(ConfigError::InvalidValue {
                field: "handicap_default",
                reason: format!("'{handicap}' is not a signed decimal number"),
            }
            .into());
        }

        if self.validation.max_name_length == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_name_length",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.validation.max_outcome_count == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_outcome_count",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(max_odds) = self.validation.max_odds {
            if max_odds <= Decimal::ONE {
                return Err(ConfigError::InvalidValue {
                    field: "max_odds",
                    reason: "must be greater than 1.0".to_string(),
                }
                .into());
            }
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        if self.paths.output_suffix.is_empty() {
            return Err(ConfigError::MissingField {
                field: "output_suffix",
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Converter using the configured specifier defaults.
    #[must_use]
    pub fn converter(&self) -> MarketConverter {
        MarketConverter::new(self.specifiers.clone())
    }

    /// Effective validation policy.
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        self.validation.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.specifiers.total_default, "2.5");
        assert_eq!(config.specifiers.handicap_default, "0");
        assert_eq!(config.validation_policy(), ValidationPolicy::lenient());
        assert_eq!(config.paths.output_suffix, "_output");
    }

    #[test]
    fn strict_preset_with_override() {
        let config = Config::parse_toml(
            r#"
[validation]
preset = "strict"
max_odds = 500.0
require_numeric_event_id = false
"#,
        )
        .unwrap();

        let policy = config.validation_policy();
        assert!(policy.enforce_uid_shape);
        assert!(!policy.require_numeric_event_id);
        assert_eq!(policy.max_name_length, Some(100));
        assert_eq!(policy.max_odds, Some(dec!(500)));
    }

    #[test]
    fn rejects_non_numeric_total_default() {
        let result = Config::parse_toml("[specifiers]\ntotal_default = \"abc\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "total_default",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_signed_total_default() {
        let result = Config::parse_toml("[specifiers]\ntotal_default = \"-2.5\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn accepts_signed_handicap_default() {
        let config = Config::parse_toml("[specifiers]\nhandicap_default = \"-0.5\"\n").unwrap();
        assert_eq!(config.converter().defaults().handicap_default, "-0.5");
    }

    #[test]
    fn rejects_blank_handicap_default() {
        let result = Config::parse_toml("[specifiers]\nhandicap_default = \" \"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "handicap_default"
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn rejects_odds_limit_at_one() {
        let result = Config::parse_toml("[validation]\nmax_odds = 1.0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "max_odds", .. }))
        ));
    }

    #[test]
    fn rejects_zero_limits() {
        assert!(Config::parse_toml("[validation]\nmax_name_length = 0\n").is_err());
        assert!(Config::parse_toml("[validation]\nmax_outcome_count = 0\n").is_err());
    }

    #[test]
    fn rejects_unknown_preset() {
        let result = Config::parse_toml("[validation]\npreset = \"paranoid\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
