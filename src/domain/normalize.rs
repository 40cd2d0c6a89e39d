//! Text normalization for market names and outcome labels.
//!
//! Outcome labels arrive as free text such as `"Team A +1.5"` or `"over 2.5"`.
//! Two things are pulled out of them: a cleaned label used to look up the
//! outcome code, and the numeric specifier (total line or handicap).

use std::sync::LazyLock;

use regex::Regex;

/// Optional sign, digits, optional fraction. Matches handicap lines.
static SIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+(?:\.\d+)?").expect("signed number pattern"));

/// Digits with optional fraction. Matches total lines.
static UNSIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("unsigned number pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Default total line when a label carries no number.
pub const DEFAULT_TOTAL: &str = "2.5";

/// Default handicap line when a label carries no number.
pub const DEFAULT_HANDICAP: &str = "0";

/// Trim and lowercase. `None` becomes the empty string.
#[must_use]
pub fn normalize_basic(s: Option<&str>) -> String {
    s.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

/// Strip every signed number from a label, collapse whitespace and lowercase.
///
/// ```
/// use marketcanon::domain::normalize::clean_outcome_label;
///
/// assert_eq!(clean_outcome_label("Team A +1.5"), "team a");
/// assert_eq!(clean_outcome_label("over 2.5"), "over");
/// ```
#[must_use]
pub fn clean_outcome_label(s: &str) -> String {
    let stripped = SIGNED_NUMBER.replace_all(s, "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_lowercase()
}

/// First unsigned number in `s`, verbatim, or [`DEFAULT_TOTAL`].
#[must_use]
pub fn extract_total_value(s: &str) -> String {
    extract_total_value_or(s, DEFAULT_TOTAL)
}

/// First unsigned number in `s`, verbatim, or `default`.
#[must_use]
pub fn extract_total_value_or(s: &str, default: &str) -> String {
    first_match(&UNSIGNED_NUMBER, s).unwrap_or(default).to_string()
}

/// First signed-or-unsigned number in `s` with its sign kept, or [`DEFAULT_HANDICAP`].
#[must_use]
pub fn extract_handicap_value(s: &str) -> String {
    extract_handicap_value_or(s, DEFAULT_HANDICAP)
}

/// First signed-or-unsigned number in `s` with its sign kept, or `default`.
#[must_use]
pub fn extract_handicap_value_or(s: &str, default: &str) -> String {
    first_match(&SIGNED_NUMBER, s).unwrap_or(default).to_string()
}

/// True if `s` is exactly one unsigned number (valid total default).
#[must_use]
pub fn is_total_value(s: &str) -> bool {
    is_full_match(&UNSIGNED_NUMBER, s)
}

/// True if `s` is exactly one signed-or-unsigned number (valid handicap default).
#[must_use]
pub fn is_handicap_value(s: &str) -> bool {
    is_full_match(&SIGNED_NUMBER, s)
}

fn first_match<'a>(pattern: &Regex, s: &'a str) -> Option<&'a str> {
    pattern.find(s).map(|m| m.as_str())
}

fn is_full_match(pattern: &Regex, s: &str) -> bool {
    pattern
        .find(s)
        .is_some_and(|m| m.start() == 0 && m.end() == s.len())
}
