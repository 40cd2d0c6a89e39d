//! Error taxonomy for conversion, validation and identifier parsing.
//!
//! Every error here is deterministic for a given input: retrying the same call
//! yields the same error.
//!
//! # Examples
//!
//! ```
//! use marketcanon::domain::error::ConversionError;
//! use marketcanon::domain::{MarketConverter, RawMarket};
//!
//! let raw = RawMarket::new("correct score", "123456", vec![]);
//! let result = MarketConverter::default().convert(&raw);
//!
//! assert!(matches!(result, Err(ConversionError::UnknownMarketType { .. })));
//! ```

use std::fmt;

use thiserror::Error;

use super::validate::ValidationRule;

/// Failures while converting a raw market into its canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The market name matches no alias in the registry.
    #[error("unknown market type: {name}")]
    UnknownMarketType {
        /// Market name as received.
        name: String,
    },

    /// The cleaned outcome label has no code in the resolved market type.
    #[error("unknown outcome '{label}' (cleaned: '{cleaned}') for market type {market_type}")]
    UnknownOutcomeType {
        /// Outcome label as received.
        label: String,
        /// Lookup key after cleaning and normalization.
        cleaned: String,
        /// Slug of the resolved market type.
        market_type: &'static str,
    },

    /// An outcome arrived without odds.
    #[error("outcome '{label}' has no odds")]
    MissingOdds {
        /// Outcome label as received.
        label: String,
    },
}

/// A single validation rule failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "validation failed ({rule}){}: {value}",
    .index.map(|i| format!(" at outcome {i}")).unwrap_or_default()
)]
pub struct ValidationError {
    /// Rule that was violated.
    pub rule: ValidationRule,
    /// Offending value rendered as text.
    pub value: String,
    /// Outcome position for per-outcome rules.
    pub index: Option<usize>,
}

impl ValidationError {
    /// Market-level violation.
    pub fn new(rule: ValidationRule, value: impl fmt::Display) -> Self {
        Self {
            rule,
            value: value.to_string(),
            index: None,
        }
    }

    /// Violation on the outcome at `index`.
    pub fn at(rule: ValidationRule, index: usize, value: impl fmt::Display) -> Self {
        Self {
            rule,
            value: value.to_string(),
            index: Some(index),
        }
    }
}

/// Which identifier shape was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UidKind {
    Market,
    Outcome,
}

impl fmt::Display for UidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => f.write_str("market"),
            Self::Outcome => f.write_str("outcome"),
        }
    }
}

/// A UID failed shape validation while being parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {expected} UID: '{uid}'")]
pub struct IdentifierFormatError {
    /// The rejected identifier.
    pub uid: String,
    /// Shape that was expected.
    pub expected: UidKind,
}

/// Any failure raised by the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Identifier(#[from] IdentifierFormatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_includes_index() {
        let err = ValidationError::at(ValidationRule::OddsNotAboveOne, 2, "1.0");
        assert_eq!(
            err.to_string(),
            "validation failed (odds_not_above_one) at outcome 2: 1.0"
        );
    }

    #[test]
    fn validation_error_display_without_index() {
        let err = ValidationError::new(ValidationRule::EventIdBlank, "");
        assert_eq!(err.to_string(), "validation failed (event_id_blank): ");
    }

    #[test]
    fn unknown_outcome_names_both_labels() {
        let err = ConversionError::UnknownOutcomeType {
            label: "Home +1".into(),
            cleaned: "home".into(),
            market_type: "handicap",
        };
        let msg = err.to_string();
        assert!(msg.contains("'Home +1'"));
        assert!(msg.contains("'home'"));
        assert!(msg.contains("handicap"));
    }

    #[test]
    fn identifier_error_names_shape() {
        let err = IdentifierFormatError {
            uid: "123".into(),
            expected: UidKind::Market,
        };
        assert_eq!(err.to_string(), "invalid market UID: '123'");
    }
}
