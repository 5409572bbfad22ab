//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{handle_demo, handle_dump, handle_route};
use crate::config::Config;
use crate::exit::ShortpathExit;
use crate::tokenize::DelimiterSet;
use anyhow::Result;

/// Loads configuration and layers command-line overrides on top.
///
/// # Errors
/// Returns error if the config file cannot be loaded.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(ref delimiters) = cli.delimiters {
        config.delimiters = DelimiterSet::with_chars(delimiters);
    }
    if let Some(ref separator) = cli.separator {
        config.render.separator.clone_from(separator);
    }
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

/// Executes the parsed command. No subcommand runs the demo.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli) -> Result<ShortpathExit> {
    let config = resolve_config(cli)?;
    if !config.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        None => handle_demo(&config, false),
        Some(Commands::Demo { json }) => handle_demo(&config, *json),
        Some(Commands::Dump { file, json }) => handle_dump(&config, file.as_deref(), *json),
        Some(Commands::Route { file }) => handle_route(&config, file.as_deref()),
    }
}
