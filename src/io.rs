//! JSON files in and out, and where they live.
//!
//! Input is an array of raw markets; unknown properties are ignored. Output is
//! a pretty-printed array of canonical markets.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::{CanonicalMarket, RawMarket};
use crate::error::{Error, Result};

/// Read an array of raw markets from `path`.
///
/// # Errors
///
/// - [`Error::MissingFile`] if `path` is not a regular file
/// - [`Error::Json`] if the file is not valid JSON or an element does not
///   describe a market
/// - [`Error::InvalidShape`] if the JSON root is not an array
pub fn read_raw_markets(path: &Path) -> Result<Vec<RawMarket>> {
    if !path.is_file() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&content)?;
    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidShape(format!(
                "expected an array of markets, found {}",
                describe(&other)
            )))
        }
    };

    let markets = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<RawMarket>, _>>()?;
    debug!(path = %path.display(), count = markets.len(), "Read raw markets");
    Ok(markets)
}

/// Read an array of canonical markets, e.g. a previous conversion output.
///
/// # Errors
///
/// Same as [`read_raw_markets`].
pub fn read_canonical_markets(path: &Path) -> Result<Vec<CanonicalMarket>> {
    if !path.is_file() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&content)?;
    if !root.is_array() {
        return Err(Error::InvalidShape(format!(
            "expected an array of markets, found {}",
            describe(&root)
        )));
    }
    Ok(serde_json::from_value(root)?)
}

/// Write canonical markets as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or file cannot be written.
pub fn write_canonical_markets(path: &Path, markets: &[CanonicalMarket]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(markets)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), count = markets.len(), "Wrote canonical markets");
    Ok(())
}

/// Resolve an input name: as given if it is a file, else under `input_dir`.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] naming the original path if neither exists.
pub fn resolve_input_path(name: &Path, input_dir: &Path) -> Result<PathBuf> {
    if name.is_file() {
        return Ok(name.to_path_buf());
    }
    let candidate = input_dir.join(name);
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(Error::MissingFile {
        path: name.to_path_buf(),
    })
}

/// Output location for `input`: `<output_dir>/<stem><suffix>.<ext>`.
///
/// The extension defaults to `json` when the input has none.
#[must_use]
pub fn resolve_output_path(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "markets".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "json".to_string());
    output_dir.join(format!("{stem}{suffix}.{ext}"))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
