//! Handler for `convert`.

use serde_json::json;

use crate::cli::command::ConvertArgs;
use crate::cli::output;
use crate::config::Config;
use crate::domain::{convert_all, convert_all_validated, BatchReport, ValidationPolicy};
use crate::error::Result;
use crate::io;

/// Execute `convert`.
///
/// Markets that fail are reported and skipped; only unreadable input or
/// unwritable output is an error.
pub fn execute(config: &Config, args: &ConvertArgs) -> Result<()> {
    let input = io::resolve_input_path(&args.input, &config.paths.input_dir)?;
    let output_path = args.output.clone().unwrap_or_else(|| {
        io::resolve_output_path(&input, &config.paths.output_dir, &config.paths.output_suffix)
    });

    let raws = io::read_raw_markets(&input)?;
    let converter = config.converter();
    let report = if args.strict {
        convert_all_validated(&converter, &ValidationPolicy::strict(), &raws)
    } else if args.validate {
        convert_all_validated(&converter, &config.validation_policy(), &raws)
    } else {
        convert_all(&converter, &raws)
    };

    io::write_canonical_markets(&output_path, report.markets())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "convert",
            "input": input.display().to_string(),
            "output": output_path.display().to_string(),
            "total": report.total(),
            "converted": report.converted(),
            "failed": report.failed(),
            "failures": failures_json(&report),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Conversion");
    output::field("Input", input.display());
    output::field("Output", output_path.display());
    output::field("Total", report.total());
    output::field("Converted", report.converted());
    output::field("Failed", report.failed());

    if output::verbosity() > 0 && report.converted() > 0 {
        output::section("Converted markets");
        for market in report.markets() {
            output::note(&format!(
                "{} ({} outcomes)",
                market.market_uid(),
                market.outcomes().len()
            ));
        }
    }

    if report.failed() > 0 {
        output::section("Skipped markets");
        for failure in report.failures() {
            output::warning(&format!(
                "#{} {}: {}",
                failure.index,
                output::highlight(&failure.market_name),
                failure.error
            ));
        }
    }

    output::success(&format!(
        "Wrote {} market(s) to {}",
        report.converted(),
        output_path.display()
    ));
    Ok(())
}

fn failures_json(report: &BatchReport) -> serde_json::Value {
    report
        .failures()
        .iter()
        .map(|failure| {
            json!({
                "index": failure.index,
                "market": failure.market_name,
                "error": failure.error.to_string(),
            })
        })
        .collect()
}
