use std::process::ExitCode;

use clap::Parser;
use marketcanon::cli::command::Cli;
use marketcanon::cli::diagnostic::CommandError;
use marketcanon::cli::{self, output};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    match cli::run(&args) {
        Ok(code) => code,
        Err(err) => {
            if output::is_json() {
                output::error(&err.to_string());
            } else {
                let report = miette::Report::new(CommandError::from(&err));
                eprintln!("{report:?}");
            }
            ExitCode::FAILURE
        }
    }
}
