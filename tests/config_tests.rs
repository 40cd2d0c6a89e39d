//! Configuration file loading.

use std::io::Write;

use marketcanon::config::{Config, ValidationPreset};
use marketcanon::domain::ValidationPolicy;
use marketcanon::error::{ConfigError, Error};
use marketcanon::testkit::fixtures::STRICT_CONFIG_TOML;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_full_config() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[specifiers]
total_default = "3.5"
handicap_default = "-0.5"

[validation]
preset = "lenient"
enforce_uid_shape = true
max_odds = 250

[paths]
input_dir = "in"
output_dir = "out"
output_suffix = "_canon"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.specifiers.total_default, "3.5");
    assert_eq!(config.paths.output_suffix, "_canon");

    let policy = config.validation_policy();
    assert!(policy.enforce_uid_shape);
    assert!(!policy.require_numeric_event_id);
    assert_eq!(policy.max_odds, Some(dec!(250)));
    assert_eq!(policy.max_name_length, None);
}

#[test]
fn strict_preset_matches_strict_policy() {
    let file = write_temp_config(STRICT_CONFIG_TOML);
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.validation.preset, ValidationPreset::Strict);
    assert_eq!(config.validation_policy(), ValidationPolicy::strict());
}

#[test]
fn missing_file_is_read_error() {
    let result = Config::load("/definitely/not/here/marketcanon.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_temp_config("[logging\nlevel = ");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn empty_suffix_is_rejected() {
    let file = write_temp_config("[paths]\noutput_suffix = \"\"\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField { field })) => assert_eq!(field, "output_suffix"),
        Err(err) => panic!("expected missing output_suffix, got {err}"),
        Ok(_) => panic!("expected empty suffix to be rejected"),
    }
}

#[test]
fn discover_without_file_uses_given_path() {
    let file = write_temp_config(STRICT_CONFIG_TOML);
    let config = Config::discover(Some(file.path())).unwrap();
    assert_eq!(config.logging.level, "warn");
}
