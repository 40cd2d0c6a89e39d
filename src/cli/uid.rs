//! Handler for `uid`.
//!
//! A three-segment UID is both a valid market UID (with specifier) and a valid
//! outcome UID (without), so every reading that parses is shown.

use serde_json::{json, Value};

use crate::cli::output;
use crate::domain::error::{IdentifierFormatError, UidKind};
use crate::domain::uid::{parse_market_uid, parse_outcome_uid, MarketUidParts};
use crate::domain::MarketTypeRegistry;
use crate::error::Result;

/// Outcome keys for `code` under the market type with `type_code`.
fn outcome_names(type_code: &str, code: i32) -> Vec<String> {
    let Ok(code) = u32::try_from(code) else {
        return Vec::new();
    };
    MarketTypeRegistry::builtin()
        .by_type_code(type_code)
        .map(|definition| {
            definition
                .outcome_codes()
                .iter()
                .filter(|(_, c)| **c == code)
                .map(|(key, _)| key.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn market_json(parts: &MarketUidParts<'_>) -> Value {
    let registry = MarketTypeRegistry::builtin();
    json!({
        "event_id": parts.event_id,
        "market_type_code": parts.market_type_code,
        "market_type": registry.by_type_code(parts.market_type_code).map(|d| d.slug()),
        "specifier_value": parts.specifier_value,
    })
}

fn print_market(title: &str, parts: &MarketUidParts<'_>) {
    output::section(title);
    output::field("Event id", parts.event_id);
    output::field("Type code", parts.market_type_code);
    match MarketTypeRegistry::builtin().by_type_code(parts.market_type_code) {
        Some(definition) => output::field("Market type", definition.slug()),
        None => output::field("Market type", output::muted("(unknown)")),
    }
    output::field(
        "Specifier",
        parts
            .specifier_value
            .map_or_else(|| output::muted("(none)"), str::to_string),
    );
}

/// Execute `uid`.
pub fn execute(uid: &str) -> Result<()> {
    let market = parse_market_uid(uid).ok();
    let outcome = parse_outcome_uid(uid)
        .ok()
        .and_then(|(prefix, code)| parse_market_uid(prefix).ok().map(|parts| (prefix, parts, code)));

    if market.is_none() && outcome.is_none() {
        return Err(IdentifierFormatError {
            uid: uid.to_string(),
            expected: UidKind::Market,
        }
        .into());
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "uid",
            "uid": uid,
            "market": market.as_ref().map(market_json),
            "outcome": outcome.as_ref().map(|(prefix, parts, code)| json!({
                "market_uid": prefix,
                "market": market_json(parts),
                "outcome_type_code": code,
                "outcome_names": outcome_names(parts.market_type_code, *code),
            })),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    if let Some(parts) = &market {
        print_market("As market UID", parts);
    }
    if let Some((prefix, parts, code)) = &outcome {
        output::section("As outcome UID");
        output::field("Market UID", prefix);
        output::field("Outcome code", code);
        let names = outcome_names(parts.market_type_code, *code);
        if !names.is_empty() {
            output::field("Outcome", names.join(" / "));
        }
        print_market("Outcome's market", parts);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_names_include_short_forms() {
        assert_eq!(outcome_names("18", 12), vec!["o".to_string(), "over".to_string()]);
        assert_eq!(outcome_names("1", 2), vec!["draw".to_string()]);
    }

    #[test]
    fn outcome_names_empty_for_unknown() {
        assert!(outcome_names("999", 1).is_empty());
        assert!(outcome_names("1", -4).is_empty());
    }
}
