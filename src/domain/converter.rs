//! Raw-to-canonical market conversion.
//!
//! Conversion is a pure function of the raw market, the static registry and
//! the configured specifier defaults. It fails fast: the first unresolvable
//! market name or outcome label aborts the whole market and no partial record
//! is produced.

use serde::Deserialize;
use tracing::{debug, trace};

use super::error::ConversionError;
use super::market::{CanonicalMarket, CanonicalOutcome, RawMarket, RawOutcome, Specifiers};
use super::normalize::{
    extract_handicap_value_or, extract_total_value_or, DEFAULT_HANDICAP, DEFAULT_TOTAL,
};
use super::registry::{outcome_key, MarketTypeDefinition, MarketTypeRegistry, SpecifierKind};
use super::uid::{build_market_uid, build_outcome_uid, MarketUid};

/// Values used when no outcome label carries a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpecifierDefaults {
    /// Total line fallback.
    pub total_default: String,
    /// Handicap line fallback.
    pub handicap_default: String,
}

impl Default for SpecifierDefaults {
    fn default() -> Self {
        Self {
            total_default: DEFAULT_TOTAL.to_string(),
            handicap_default: DEFAULT_HANDICAP.to_string(),
        }
    }
}

/// Converts raw markets into canonical markets.
#[derive(Debug, Clone)]
pub struct MarketConverter {
    registry: &'static MarketTypeRegistry,
    defaults: SpecifierDefaults,
}

impl Default for MarketConverter {
    fn default() -> Self {
        Self::new(SpecifierDefaults::default())
    }
}

impl MarketConverter {
    /// Create a converter over the builtin registry.
    #[must_use]
    pub fn new(defaults: SpecifierDefaults) -> Self {
        Self {
            registry: MarketTypeRegistry::builtin(),
            defaults,
        }
    }

    /// Specifier fallbacks in use.
    #[must_use]
    pub const fn defaults(&self) -> &SpecifierDefaults {
        &self.defaults
    }

    /// Convert a raw market.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::UnknownMarketType`] if the name matches no alias
    /// - [`ConversionError::UnknownOutcomeType`] if any outcome label has no code
    /// - [`ConversionError::MissingOdds`] if any outcome has no odds
    pub fn convert(&self, raw: &RawMarket) -> Result<CanonicalMarket, ConversionError> {
        let definition = self
            .registry
            .resolve_market_type(&raw.name)
            .ok_or_else(|| ConversionError::UnknownMarketType {
                name: raw.name.clone(),
            })?;
        debug!(
            market = %raw.name,
            market_type = definition.slug(),
            type_code = definition.type_code(),
            "Resolved market type"
        );

        let specifiers = self.extract_specifiers(raw, definition);
        let market_uid = build_market_uid(&raw.event_id, definition.type_code(), &specifiers);

        let outcomes = raw
            .outcomes
            .iter()
            .map(|outcome| convert_outcome(outcome, definition, &market_uid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CanonicalMarket::new(
            market_uid,
            definition.type_code(),
            specifiers,
            outcomes,
        ))
    }

    /// Specifier map for `raw` under the given market type.
    ///
    /// Scans outcome labels in order and keeps the first extraction that
    /// differs from the default, falling back to the default.
    #[must_use]
    pub fn extract_specifiers(&self, raw: &RawMarket, definition: &MarketTypeDefinition) -> Specifiers {
        let kind = definition.specifier_kind();
        let Some(key) = kind.key() else {
            return Specifiers::new();
        };

        let value = match kind {
            SpecifierKind::Total => {
                first_non_default(raw, &self.defaults.total_default, extract_total_value_or)
            }
            SpecifierKind::Handicap => {
                first_non_default(raw, &self.defaults.handicap_default, extract_handicap_value_or)
            }
            SpecifierKind::None => return Specifiers::new(),
        };
        trace!(key, value = %value, "Extracted specifier");

        Specifiers::from([(key.to_string(), value)])
    }
}

fn first_non_default(raw: &RawMarket, default: &str, extract: fn(&str, &str) -> String) -> String {
    raw.outcomes
        .iter()
        .map(|outcome| extract(&outcome.name, default))
        .find(|value| value != default)
        .unwrap_or_else(|| default.to_string())
}

fn convert_outcome(
    raw: &RawOutcome,
    definition: &MarketTypeDefinition,
    market_uid: &MarketUid,
) -> Result<CanonicalOutcome, ConversionError> {
    let code = definition
        .resolve_outcome_code(&raw.name)
        .ok_or_else(|| ConversionError::UnknownOutcomeType {
            label: raw.name.clone(),
            cleaned: outcome_key(&raw.name),
            market_type: definition.slug(),
        })?;
    let odds = raw.odds.ok_or_else(|| ConversionError::MissingOdds {
        label: raw.name.clone(),
    })?;

    Ok(CanonicalOutcome::new(
        build_outcome_uid(market_uid, code),
        code,
        odds,
    ))
}
