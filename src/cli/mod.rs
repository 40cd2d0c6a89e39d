//! Command-line surface over the conversion core.

pub mod command;
pub mod config;
pub mod convert;
pub mod diagnostic;
pub mod markets;
pub mod output;
pub mod uid;
pub mod validate;

use std::io::IsTerminal;
use std::process::ExitCode;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;

use command::{Cli, ColorChoice, Commands, ConfigCommand};
use output::OutputConfig;

impl ColorChoice {
    /// Whether stdout output should be colored.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

impl Cli {
    /// Output settings from the global flags.
    #[must_use]
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.json, self.quiet, self.verbose, self.color.enabled())
    }

    /// Log level implied by `-q` / `-v`, if any.
    #[must_use]
    pub fn log_level_override(&self) -> Option<&'static str> {
        match (self.quiet, self.verbose) {
            (true, _) => Some("error"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        }
    }
}

/// Run the parsed command.
///
/// # Errors
///
/// Returns an error for configuration, input or output failures.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    output::configure(cli.output_config());

    // `config validate` reads the file itself so parse errors get a span.
    let load = || -> Result<Config> {
        let config = Config::discover(cli.config.as_deref())?;
        let mut logging = config.logging.clone();
        if let Some(level) = cli.log_level_override() {
            logging.level = level.to_string();
        }
        logging.init();
        Ok(config)
    };

    match &cli.command {
        Commands::Convert(args) => convert::execute(&load()?, args).map(|()| ExitCode::SUCCESS),
        Commands::Validate(args) => validate::execute(&load()?, args),
        Commands::Markets => {
            load()?;
            markets::list().map(|()| ExitCode::SUCCESS)
        }
        Commands::Uid(args) => {
            load()?;
            uid::execute(&args.uid).map(|()| ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommand::Show) => {
            let config = load()?;
            let source = cli.config.clone().or_else(|| {
                let default = std::path::PathBuf::from(DEFAULT_CONFIG_FILE);
                default.is_file().then_some(default)
            });
            config::execute_show(&config, source.as_deref()).map(|()| ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(cli.config.as_deref())
        }
    }
}
