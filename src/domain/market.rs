//! Raw and canonical market records.
//!
//! - [`RawMarket`] / [`RawOutcome`] - Free-text input as received
//! - [`CanonicalMarket`] / [`CanonicalOutcome`] - Typed, identified output
//!
//! Canonical records serialize with the downstream field names
//! (`market_uid`, `market_type_id`, `specifiers`, `selections[].selection_uid`,
//! `selections[].selection_type_id`, `selections[].decimal_odds`).

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use super::uid::{MarketUid, OutcomeUid};

/// Specifier key to value. Holds at most one entry in practice.
pub type Specifiers = BTreeMap<String, String>;

/// A single outcome as received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawOutcome {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub odds: Option<Decimal>,
}

impl RawOutcome {
    /// Create an outcome with odds.
    pub fn new(name: impl Into<String>, odds: Decimal) -> Self {
        Self {
            name: name.into(),
            odds: Some(odds),
        }
    }
}

/// A market as received: free-text name, event id and labelled outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawMarket {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "eventId", deserialize_with = "string_or_integer")]
    pub event_id: String,
    #[serde(default, rename = "selections", alias = "outcomes")]
    pub outcomes: Vec<RawOutcome>,
}

impl RawMarket {
    /// Create a raw market.
    pub fn new(
        name: impl Into<String>,
        event_id: impl Into<String>,
        outcomes: Vec<RawOutcome>,
    ) -> Self {
        Self {
            name: name.into(),
            event_id: event_id.into(),
            outcomes,
        }
    }
}

/// Event ids arrive as strings or bare integers; both become text. `null` is blank.
fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct EventIdVisitor;

    impl Visitor<'_> for EventIdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an integer event id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(EventIdVisitor)
}

/// A resolved outcome with its identifier and code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalOutcome {
    #[serde(rename = "selection_uid")]
    outcome_uid: OutcomeUid,
    #[serde(rename = "selection_type_id")]
    outcome_type_code: u32,
    #[serde(with = "rust_decimal::serde::float")]
    decimal_odds: Decimal,
}

impl CanonicalOutcome {
    /// Create a canonical outcome.
    #[must_use]
    pub const fn new(outcome_uid: OutcomeUid, outcome_type_code: u32, decimal_odds: Decimal) -> Self {
        Self {
            outcome_uid,
            outcome_type_code,
            decimal_odds,
        }
    }

    #[must_use]
    pub const fn outcome_uid(&self) -> &OutcomeUid {
        &self.outcome_uid
    }

    #[must_use]
    pub const fn outcome_type_code(&self) -> u32 {
        self.outcome_type_code
    }

    #[must_use]
    pub const fn decimal_odds(&self) -> Decimal {
        self.decimal_odds
    }
}

/// A market resolved to its canonical type, specifier and identifiers.
///
/// Built by the converter; fields are read-only afterwards. Records read back
/// from disk go through the same type so they can be validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMarket {
    market_uid: MarketUid,
    #[serde(rename = "market_type_id")]
    market_type_code: String,
    #[serde(default)]
    specifiers: Specifiers,
    #[serde(rename = "selections")]
    outcomes: Vec<CanonicalOutcome>,
}

impl CanonicalMarket {
    /// Create a canonical market.
    pub fn new(
        market_uid: MarketUid,
        market_type_code: impl Into<String>,
        specifiers: Specifiers,
        outcomes: Vec<CanonicalOutcome>,
    ) -> Self {
        Self {
            market_uid,
            market_type_code: market_type_code.into(),
            specifiers,
            outcomes,
        }
    }

    #[must_use]
    pub const fn market_uid(&self) -> &MarketUid {
        &self.market_uid
    }

    #[must_use]
    pub fn market_type_code(&self) -> &str {
        &self.market_type_code
    }

    #[must_use]
    pub const fn specifiers(&self) -> &Specifiers {
        &self.specifiers
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CanonicalOutcome] {
        &self.outcomes
    }

    /// Outcome codes in outcome order.
    #[must_use]
    pub fn outcome_type_codes(&self) -> Vec<u32> {
        self.outcomes.iter().map(|o| o.outcome_type_code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn raw_market_reads_input_field_names() {
        let raw: RawMarket = serde_json::from_value(json!({
            "name": "Total",
            "event_id": "123456",
            "selections": [
                { "name": "over 2.5", "odds": 1.85 },
                { "name": "under 2.5", "odds": 1.95 }
            ],
            "ignored": true
        }))
        .unwrap();

        assert_eq!(raw.name, "Total");
        assert_eq!(raw.event_id, "123456");
        assert_eq!(raw.outcomes.len(), 2);
        assert_eq!(raw.outcomes[0].odds, Some(dec!(1.85)));
    }

    #[test]
    fn raw_market_accepts_aliases_and_missing_odds() {
        let raw: RawMarket = serde_json::from_value(json!({
            "name": "1x2",
            "eventId": "7",
            "outcomes": [{ "name": "draw" }]
        }))
        .unwrap();

        assert_eq!(raw.event_id, "7");
        assert_eq!(raw.outcomes[0].odds, None);
    }

    #[test]
    fn raw_market_event_id_accepts_integers() {
        let raw: RawMarket = serde_json::from_value(json!({
            "name": "1x2",
            "event_id": 123_456,
            "selections": [{ "name": "draw", "odds": 3.2 }]
        }))
        .unwrap();
        assert_eq!(raw.event_id, "123456");

        let raw: RawMarket = serde_json::from_value(json!({ "name": "1x2", "eventId": null })).unwrap();
        assert_eq!(raw.event_id, "");

        let err = serde_json::from_value::<RawMarket>(json!({ "name": "1x2", "event_id": true }))
            .unwrap_err();
        assert!(err.to_string().contains("event id"));
    }

    #[test]
    fn canonical_market_writes_downstream_field_names() {
        let market = CanonicalMarket::new(
            MarketUid::from("123456_18_2.5"),
            "18",
            Specifiers::from([("total".to_string(), "2.5".to_string())]),
            vec![CanonicalOutcome::new(
                OutcomeUid::from("123456_18_2.5_12"),
                12,
                dec!(1.85),
            )],
        );

        let value = serde_json::to_value(&market).unwrap();
        assert_eq!(
            value,
            json!({
                "market_uid": "123456_18_2.5",
                "market_type_id": "18",
                "specifiers": { "total": "2.5" },
                "selections": [{
                    "selection_uid": "123456_18_2.5_12",
                    "selection_type_id": 12,
                    "decimal_odds": 1.85
                }]
            })
        );
    }

    #[test]
    fn canonical_market_reads_back() {
        let market: CanonicalMarket = serde_json::from_value(json!({
            "market_uid": "1_50",
            "market_type_id": "50",
            "specifiers": {},
            "selections": [{
                "selection_uid": "1_50_10",
                "selection_type_id": 10,
                "decimal_odds": 1.7
            }]
        }))
        .unwrap();

        assert_eq!(market.market_uid().as_str(), "1_50");
        assert_eq!(market.outcome_type_codes(), vec![10]);
        assert_eq!(market.outcomes()[0].decimal_odds(), dec!(1.7));
    }
}
