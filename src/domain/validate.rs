//! Structural and semantic checks on raw and canonical markets.
//!
//! Both passes are pure and stop at the first violation. Checks run in a fixed
//! order (market-level fields first, then each outcome in input order), so the
//! reported rule is stable for a given input.
//!
//! Optional limits live in [`ValidationPolicy`]. The lenient policy applies
//! only the unconditional checks; the strict policy turns every limit on.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::ValidationError;
use super::market::{CanonicalMarket, CanonicalOutcome, RawMarket, RawOutcome};
use super::uid::{is_valid_market_uid, is_valid_outcome_uid};

/// Odds must be strictly above this value.
const MIN_ODDS_EXCLUSIVE: Decimal = dec!(1.0);

/// Name of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    MarketNameBlank,
    MarketNameTooLong,
    EventIdBlank,
    EventIdNotPositiveInteger,
    NoOutcomes,
    TooManyOutcomes,
    OutcomeNameBlank,
    OddsMissing,
    OddsNotAboveOne,
    OddsTooHigh,
    MarketUidBlank,
    MarketUidMalformed,
    MarketTypeCodeBlank,
    MarketTypeCodeNotPositiveInteger,
    SpecifierKeyBlank,
    SpecifierValueBlank,
    OutcomeUidBlank,
    OutcomeUidMalformed,
    OutcomeUidPrefixMismatch,
    OutcomeTypeCodeNotPositive,
}

impl ValidationRule {
    /// Snake-case rule name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketNameBlank => "market_name_blank",
            Self::MarketNameTooLong => "market_name_too_long",
            Self::EventIdBlank => "event_id_blank",
            Self::EventIdNotPositiveInteger => "event_id_not_positive_integer",
            Self::NoOutcomes => "no_outcomes",
            Self::TooManyOutcomes => "too_many_outcomes",
            Self::OutcomeNameBlank => "outcome_name_blank",
            Self::OddsMissing => "odds_missing",
            Self::OddsNotAboveOne => "odds_not_above_one",
            Self::OddsTooHigh => "odds_too_high",
            Self::MarketUidBlank => "market_uid_blank",
            Self::MarketUidMalformed => "market_uid_malformed",
            Self::MarketTypeCodeBlank => "market_type_code_blank",
            Self::MarketTypeCodeNotPositiveInteger => "market_type_code_not_positive_integer",
            Self::SpecifierKeyBlank => "specifier_key_blank",
            Self::SpecifierValueBlank => "specifier_value_blank",
            Self::OutcomeUidBlank => "outcome_uid_blank",
            Self::OutcomeUidMalformed => "outcome_uid_malformed",
            Self::OutcomeUidPrefixMismatch => "outcome_uid_prefix_mismatch",
            Self::OutcomeTypeCodeNotPositive => "outcome_type_code_not_positive",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional checks applied on top of the unconditional ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationPolicy {
    /// Canonical pass: UIDs must have the documented shape and outcome UIDs
    /// must be prefixed by their market UID.
    pub enforce_uid_shape: bool,
    /// Raw pass: event id must parse as a positive integer.
    pub require_numeric_event_id: bool,
    /// Raw pass: maximum market name length in characters.
    pub max_name_length: Option<usize>,
    /// Raw pass: maximum number of outcomes.
    pub max_outcome_count: Option<usize>,
    /// Raw pass: maximum odds, inclusive.
    pub max_odds: Option<Decimal>,
}

impl ValidationPolicy {
    /// Unconditional checks only.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Every optional check on, with the reference limits.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enforce_uid_shape: true,
            require_numeric_event_id: true,
            max_name_length: Some(100),
            max_outcome_count: Some(50),
            max_odds: Some(dec!(1000.0)),
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn is_positive_integer(s: &str) -> bool {
    s.parse::<i64>().is_ok_and(|n| n > 0)
}

/// Check a raw market before conversion.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_raw(market: &RawMarket, policy: &ValidationPolicy) -> Result<(), ValidationError> {
    use ValidationRule as R;

    if is_blank(&market.name) {
        return Err(ValidationError::new(R::MarketNameBlank, &market.name));
    }
    if let Some(max) = policy.max_name_length {
        if market.name.chars().count() > max {
            return Err(ValidationError::new(R::MarketNameTooLong, &market.name));
        }
    }

    if is_blank(&market.event_id) {
        return Err(ValidationError::new(R::EventIdBlank, &market.event_id));
    }
    if policy.require_numeric_event_id && !is_positive_integer(&market.event_id) {
        return Err(ValidationError::new(
            R::EventIdNotPositiveInteger,
            &market.event_id,
        ));
    }

    if market.outcomes.is_empty() {
        return Err(ValidationError::new(R::NoOutcomes, 0));
    }
    if let Some(max) = policy.max_outcome_count {
        if market.outcomes.len() > max {
            return Err(ValidationError::new(R::TooManyOutcomes, market.outcomes.len()));
        }
    }

    market
        .outcomes
        .iter()
        .enumerate()
        .try_for_each(|(index, outcome)| validate_raw_outcome(index, outcome, policy))
}

fn validate_raw_outcome(
    index: usize,
    outcome: &RawOutcome,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    use ValidationRule as R;

    if is_blank(&outcome.name) {
        return Err(ValidationError::at(R::OutcomeNameBlank, index, &outcome.name));
    }
    let Some(odds) = outcome.odds else {
        return Err(ValidationError::at(R::OddsMissing, index, &outcome.name));
    };
    if odds <= MIN_ODDS_EXCLUSIVE {
        return Err(ValidationError::at(R::OddsNotAboveOne, index, odds));
    }
    if let Some(max) = policy.max_odds {
        if odds > max {
            return Err(ValidationError::at(R::OddsTooHigh, index, odds));
        }
    }
    Ok(())
}

/// Check a canonical market after conversion.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_canonical(
    market: &CanonicalMarket,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    use ValidationRule as R;

    let market_uid = market.market_uid().as_str();
    if is_blank(market_uid) {
        return Err(ValidationError::new(R::MarketUidBlank, market_uid));
    }
    if policy.enforce_uid_shape && !is_valid_market_uid(market_uid) {
        return Err(ValidationError::new(R::MarketUidMalformed, market_uid));
    }

    let type_code = market.market_type_code();
    if is_blank(type_code) {
        return Err(ValidationError::new(R::MarketTypeCodeBlank, type_code));
    }
    if !is_positive_integer(type_code) {
        return Err(ValidationError::new(
            R::MarketTypeCodeNotPositiveInteger,
            type_code,
        ));
    }

    for (key, value) in market.specifiers() {
        if is_blank(key) {
            return Err(ValidationError::new(R::SpecifierKeyBlank, key));
        }
        if is_blank(value) {
            return Err(ValidationError::new(R::SpecifierValueBlank, key));
        }
    }

    if market.outcomes().is_empty() {
        return Err(ValidationError::new(R::NoOutcomes, 0));
    }

    market
        .outcomes()
        .iter()
        .enumerate()
        .try_for_each(|(index, outcome)| {
            validate_canonical_outcome(index, outcome, market_uid, policy)
        })
}

fn validate_canonical_outcome(
    index: usize,
    outcome: &CanonicalOutcome,
    market_uid: &str,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    use ValidationRule as R;

    let uid = outcome.outcome_uid().as_str();
    if is_blank(uid) {
        return Err(ValidationError::at(R::OutcomeUidBlank, index, uid));
    }
    if policy.enforce_uid_shape {
        if !is_valid_outcome_uid(uid) {
            return Err(ValidationError::at(R::OutcomeUidMalformed, index, uid));
        }
        if !uid.starts_with(market_uid) {
            return Err(ValidationError::at(R::OutcomeUidPrefixMismatch, index, uid));
        }
    }
    if outcome.outcome_type_code() == 0 {
        return Err(ValidationError::at(R::OutcomeTypeCodeNotPositive, index, 0));
    }
    if outcome.decimal_odds() <= MIN_ODDS_EXCLUSIVE {
        return Err(ValidationError::at(
            R::OddsNotAboveOne,
            index,
            outcome.decimal_odds(),
        ));
    }
    Ok(())
}
