//! Builders for market records used across tests.

use rust_decimal::Decimal;

use crate::domain::{
    CanonicalMarket, CanonicalOutcome, MarketUid, OutcomeUid, RawMarket, RawOutcome, Specifiers,
};

/// Raw market whose outcomes all carry odds.
pub fn raw_market(name: &str, event_id: &str, outcomes: &[(&str, Decimal)]) -> RawMarket {
    RawMarket::new(
        name,
        event_id,
        outcomes
            .iter()
            .map(|(label, odds)| RawOutcome::new(*label, *odds))
            .collect(),
    )
}

/// Canonical market with UIDs derived from `market_uid` and the given codes.
pub fn canonical_market(
    market_uid: &str,
    market_type_code: &str,
    specifiers: &[(&str, &str)],
    outcomes: &[(u32, Decimal)],
) -> CanonicalMarket {
    let specifiers: Specifiers = specifiers
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let outcomes = outcomes
        .iter()
        .map(|(code, odds)| {
            CanonicalOutcome::new(OutcomeUid::new(format!("{market_uid}_{code}")), *code, *odds)
        })
        .collect();
    CanonicalMarket::new(MarketUid::from(market_uid), market_type_code, specifiers, outcomes)
}
