//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde_json::json;

use crate::cli::diagnostic::ConfigDiagnostic;
use crate::cli::output;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{ConfigError, Error, Result};

fn optional(value: Option<impl ToString>) -> String {
    value.map_or_else(|| output::muted("(none)"), |v| v.to_string())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, source: Option<&Path>) -> Result<()> {
    let policy = config.validation_policy();
    let source = source.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source,
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "specifiers": {
                "total_default": config.specifiers.total_default,
                "handicap_default": config.specifiers.handicap_default,
            },
            "validation": {
                "preset": config.validation.preset.as_str(),
                "policy": policy,
            },
            "paths": {
                "input_dir": config.paths.input_dir.display().to_string(),
                "output_dir": config.paths.output_dir.display().to_string(),
                "output_suffix": config.paths.output_suffix,
            },
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field("Source", source);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Specifiers");
    output::field("Total", &config.specifiers.total_default);
    output::field("Handicap", &config.specifiers.handicap_default);

    output::section("Validation");
    output::field("Preset", config.validation.preset.as_str());
    output::field("UID shape", policy.enforce_uid_shape);
    output::field("Numeric event", policy.require_numeric_event_id);
    output::field("Max name", optional(policy.max_name_length));
    output::field("Max outcomes", optional(policy.max_outcome_count));
    output::field("Max odds", optional(policy.max_odds));

    output::section("Paths");
    output::field("Input dir", config.paths.input_dir.display());
    output::field("Output dir", config.paths.output_dir.display());
    output::field("Output suffix", &config.paths.output_suffix);
    Ok(())
}

/// Execute `config validate`.
///
/// Parse failures are rendered with the offending span; the exit code is
/// non-zero for any invalid file.
pub fn execute_validate(path: Option<&Path>) -> Result<ExitCode> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
    let content = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;

    match Config::parse_toml(&content) {
        Ok(_) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": true,
                }));
            } else {
                output::section("Config Validation");
                output::field("Path", path.display());
                output::success("Configuration is valid");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": false,
                    "error": err.to_string(),
                }));
                return Ok(ExitCode::FAILURE);
            }
            match &err {
                Error::Config(ConfigError::Parse(parse)) => {
                    let report = miette::Report::new(ConfigDiagnostic::from_parse(parse, content));
                    eprintln!("{report:?}");
                }
                other => output::error(&other.to_string()),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
