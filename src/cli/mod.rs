//! CLI module for sms-notifier
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading with CLI overrides
//! - Command handlers for the notify and check operations

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, NotifyArgs};

use crate::config::ConfigLoader;
use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration and apply CLI overrides
///
/// `--config` selects a single file; otherwise the layered directory from
/// `SMS_NOTIFIER_CONFIG_DIR` (or `./config`) is used. `--env` overrides the
/// detected environment, and `-v`/`-q` override the log level.
///
/// # Errors
/// Returns error if configuration loading or validation fails
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path),
        None => ConfigLoader::new()?,
    };
    let loader = match cli.env {
        Some(env) => loader.with_environment(env.into()),
        None => loader,
    };

    let mut settings = loader.load()?;
    apply_cli_overrides(cli, &mut settings);
    Ok(settings)
}

fn apply_cli_overrides(cli: &Cli, settings: &mut Settings) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if the logger settings are invalid or a global subscriber
/// is already installed
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}
