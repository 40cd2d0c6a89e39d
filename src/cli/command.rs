//! Command-line interface definitions.
//!
//! Defines the CLI structure for the marketcanon binary using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert free-text betting markets into canonical, identified records
#[derive(Parser, Debug)]
#[command(name = "marketcanon")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file (default: marketcanon.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON file of raw markets into canonical markets
    Convert(ConvertArgs),

    /// Check raw markets without converting them
    Validate(ValidateArgs),

    /// List supported market types
    Markets,

    /// Break a market or outcome UID into its parts
    Uid(UidArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `marketcanon config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input file, as a path or a name under the configured input directory.
    pub input: PathBuf,

    /// Output file (default: `<output_dir>/<stem><suffix>.<ext>`).
    pub output: Option<PathBuf>,

    /// Validate each market before and after conversion.
    #[arg(long)]
    pub validate: bool,

    /// Validate with the strict policy (implies --validate).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Input file, as a path or a name under the configured input directory.
    pub input: PathBuf,

    /// Use the strict policy instead of the configured one.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `uid` subcommand.
#[derive(Parser, Debug)]
pub struct UidArgs {
    /// Market UID (`event_type[_specifier]`) or outcome UID (`market_code`).
    pub uid: String,
}
