//! Market type listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::{MarketTypeDefinition, MarketTypeRegistry};
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Market type")]
    slug: &'static str,
    #[tabled(rename = "Code")]
    type_code: &'static str,
    #[tabled(rename = "Specifier")]
    specifier: String,
    #[tabled(rename = "Aliases")]
    aliases: String,
    #[tabled(rename = "Outcomes")]
    outcomes: String,
}

fn outcome_summary(definition: &MarketTypeDefinition) -> String {
    definition
        .outcome_codes()
        .iter()
        .map(|(key, code)| format!("{key}={code}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// List supported market types.
pub fn list() -> Result<()> {
    let registry = MarketTypeRegistry::builtin();

    if output::is_json() {
        let types: Vec<_> = registry
            .definitions()
            .iter()
            .map(|d| {
                json!({
                    "slug": d.slug(),
                    "type_code": d.type_code(),
                    "specifier": d.specifier_kind(),
                    "specifier_key": d.specifier_kind().key(),
                    "aliases": d.name_aliases(),
                    "outcomes": d.outcome_codes(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "markets",
            "market_types": types,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Supported market types");

    let rows: Vec<MarketRow> = registry
        .definitions()
        .iter()
        .map(|d| MarketRow {
            slug: d.slug(),
            type_code: d.type_code(),
            specifier: match d.specifier_kind().key() {
                Some(key) => format!("{} ({key})", d.specifier_kind()),
                None => d.specifier_kind().to_string(),
            },
            aliases: d
                .name_aliases()
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            outcomes: outcome_summary(d),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "names are matched case-insensitively, e.g. {}",
        output::highlight("\"1st Half - Total\"")
    ));
    Ok(())
}
