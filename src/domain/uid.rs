//! Deterministic identifiers for markets and outcomes.
//!
//! A market UID is `eventId_typeCode[_specifierValue]` and an outcome UID is
//! the market UID followed by `_outcomeCode`. Both are plain strings with a
//! parseable structure, wrapped in newtypes for type safety.
//!
//! Event ids containing `_` produce UIDs that no longer parse back into the
//! same parts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{IdentifierFormatError, UidKind};

const SEPARATOR: char = '_';

/// Market identifier.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarketUid(String);

impl MarketUid {
    /// Wrap an existing identifier without validating it.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Get the UID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketUid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Outcome identifier, textually prefixed by its market UID.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutcomeUid(String);

impl OutcomeUid {
    /// Wrap an existing identifier without validating it.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Get the UID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutcomeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OutcomeUid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Build `eventId_typeCode[_specifierValue]`.
///
/// The specifier value is the first non-blank value of `specifiers` in key
/// order. Markets carry at most one specifier, so the order only matters if
/// that ever changes.
#[must_use]
pub fn build_market_uid(
    event_id: &str,
    market_type_code: &str,
    specifiers: &BTreeMap<String, String>,
) -> MarketUid {
    let mut uid = format!("{event_id}{SEPARATOR}{market_type_code}");
    if let Some(value) = specifiers.values().find(|v| !v.trim().is_empty()) {
        uid.push(SEPARATOR);
        uid.push_str(value);
    }
    MarketUid(uid)
}

/// Build `marketUid_outcomeCode`.
#[must_use]
pub fn build_outcome_uid(market_uid: &MarketUid, outcome_type_code: u32) -> OutcomeUid {
    OutcomeUid(format!("{market_uid}{SEPARATOR}{outcome_type_code}"))
}

/// Non-blank with 2 or 3 non-empty `_`-separated segments.
#[must_use]
pub fn is_valid_market_uid(uid: &str) -> bool {
    if uid.trim().is_empty() {
        return false;
    }
    let segments: Vec<&str> = uid.split(SEPARATOR).collect();
    (2..=3).contains(&segments.len()) && segments.iter().all(|s| !s.is_empty())
}

/// Non-blank with at least 3 segments, the last of which is an integer.
#[must_use]
pub fn is_valid_outcome_uid(uid: &str) -> bool {
    if uid.trim().is_empty() {
        return false;
    }
    let segments: Vec<&str> = uid.split(SEPARATOR).collect();
    segments.len() >= 3
        && segments
            .last()
            .is_some_and(|last| last.parse::<i32>().is_ok())
}

/// Positional parts of a market UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketUidParts<'a> {
    pub event_id: &'a str,
    pub market_type_code: &'a str,
    pub specifier_value: Option<&'a str>,
}

/// Split a market UID into its parts after validating its shape.
///
/// # Errors
///
/// Returns [`IdentifierFormatError`] if [`is_valid_market_uid`] rejects `uid`.
pub fn parse_market_uid(uid: &str) -> Result<MarketUidParts<'_>, IdentifierFormatError> {
    if !is_valid_market_uid(uid) {
        return Err(IdentifierFormatError {
            uid: uid.to_string(),
            expected: UidKind::Market,
        });
    }
    let mut segments = uid.split(SEPARATOR);
    let event_id = segments.next().unwrap_or_default();
    let market_type_code = segments.next().unwrap_or_default();
    Ok(MarketUidParts {
        event_id,
        market_type_code,
        specifier_value: segments.next(),
    })
}

/// Event id segment of a market UID.
///
/// # Errors
///
/// Returns [`IdentifierFormatError`] if the UID is malformed.
pub fn extract_event_id(uid: &str) -> Result<&str, IdentifierFormatError> {
    parse_market_uid(uid).map(|parts| parts.event_id)
}

/// Market type code segment of a market UID.
///
/// # Errors
///
/// Returns [`IdentifierFormatError`] if the UID is malformed.
pub fn extract_market_type_code(uid: &str) -> Result<&str, IdentifierFormatError> {
    parse_market_uid(uid).map(|parts| parts.market_type_code)
}

/// Specifier segment of a market UID, absent for specifier-less markets.
///
/// # Errors
///
/// Returns [`IdentifierFormatError`] if the UID is malformed.
pub fn extract_specifier_value(uid: &str) -> Result<Option<&str>, IdentifierFormatError> {
    parse_market_uid(uid).map(|parts| parts.specifier_value)
}

/// Split an outcome UID into its market UID prefix and outcome code.
///
/// # Errors
///
/// Returns [`IdentifierFormatError`] if [`is_valid_outcome_uid`] rejects `uid`.
pub fn parse_outcome_uid(uid: &str) -> Result<(&str, i32), IdentifierFormatError> {
    let malformed = || IdentifierFormatError {
        uid: uid.to_string(),
        expected: UidKind::Outcome,
    };
    if !is_valid_outcome_uid(uid) {
        return Err(malformed());
    }
    let (market, code) = uid.rsplit_once(SEPARATOR).ok_or_else(malformed)?;
    let code = code.parse::<i32>().map_err(|_| malformed())?;
    Ok((market, code))
}
