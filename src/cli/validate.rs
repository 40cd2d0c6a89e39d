//! Handler for `validate`.

use std::process::ExitCode;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::command::ValidateArgs;
use crate::cli::output;
use crate::config::Config;
use crate::domain::{validate_raw, ValidationError, ValidationPolicy};
use crate::error::Result;
use crate::io;

#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Value")]
    value: String,
}

struct Violation {
    index: usize,
    market: String,
    error: ValidationError,
}

/// Execute `validate`. Fails when any market breaks a rule.
pub fn execute(config: &Config, args: &ValidateArgs) -> Result<ExitCode> {
    let input = io::resolve_input_path(&args.input, &config.paths.input_dir)?;
    let raws = io::read_raw_markets(&input)?;
    let policy = if args.strict {
        ValidationPolicy::strict()
    } else {
        config.validation_policy()
    };

    let violations: Vec<Violation> = raws
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            validate_raw(raw, &policy).err().map(|error| Violation {
                index,
                market: raw.name.clone(),
                error,
            })
        })
        .collect();

    let exit = if violations.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if output::is_json() {
        let items: Vec<_> = violations
            .iter()
            .map(|v| {
                json!({
                    "index": v.index,
                    "market": v.market,
                    "rule": v.error.rule,
                    "outcome": v.error.index,
                    "value": v.error.value,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "validate",
            "input": input.display().to_string(),
            "total": raws.len(),
            "invalid": violations.len(),
            "violations": items,
        }));
        return Ok(exit);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Validation");
    output::field("Input", input.display());
    output::field("Markets", raws.len());
    output::field("Invalid", violations.len());

    if violations.is_empty() {
        output::success("All markets passed");
        return Ok(exit);
    }

    if !output::is_quiet() {
        let rows: Vec<ViolationRow> = violations
            .into_iter()
            .map(|v| ViolationRow {
                index: v.index,
                market: v.market,
                rule: v.error.rule.to_string(),
                outcome: v.error.index.map(|i| i.to_string()).unwrap_or_default(),
                value: v.error.value,
            })
            .collect();
        output::section("Violations");
        output::lines(&Table::new(rows).to_string());
    }
    output::error("one or more markets failed validation");
    Ok(exit)
}
