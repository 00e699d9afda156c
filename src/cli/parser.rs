//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::civil::DateTime;
use std::path::PathBuf;

use crate::models::BuildStatus;

/// SMS notifications for failed builds
#[derive(Parser, Debug)]
#[command(name = "sms-notifier")]
#[command(about = "SMS notifications for failed builds")]
#[command(long_about = "
sms-notifier composes a short SMS when a build fails or turns unstable and
hands it to the configured SMS sender. This binary rehearses that flow with
a console sender that logs messages instead of delivering them.

EXAMPLES:
    # Notify about a failed build
    sms-notifier notify --name nightly --status failure

    # Use a fixed completion time and custom recipients
    sms-notifier notify --name nightly --status unstable \\
        --timestamp '2013-05-01 10:00:00' --recipients '+6591234567,+6598765432'

    # Rehearse a delivery failure
    sms-notifier notify --name nightly --status failure --fail-with 'Quota exceeded'

    # Check the configured recipient list
    sms-notifier check --explain

    # Check a recipient list given on the command line
    sms-notifier check '+6591234567, 98765432'
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered configuration directory.
    ///
    /// Example: --config /etc/sms-notifier/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Handle one finished build
    ///
    /// Runs the same decision logic a build host would: only failed and
    /// unstable builds are notified, and a delivery failure downgrades the
    /// reported status to UNSTABLE.
    Notify(NotifyArgs),

    /// Check a recipient list
    ///
    /// Runs the configuration-time recipient check. Exits with status 1 when
    /// some numbers are invalid.
    Check {
        /// Comma separated recipients; defaults to notification.recipients
        #[arg(value_name = "RECIPIENTS")]
        recipients: Option<String>,

        /// Print a verdict for every recipient
        #[arg(long)]
        explain: bool,
    },
}

/// Arguments of the notify command
#[derive(Args, Debug, Clone)]
pub struct NotifyArgs {
    /// Build display name
    #[arg(long, value_parser = super::validation::validate_build_name)]
    pub name: String,

    /// Build status: success, unstable, failure, not_built or aborted
    #[arg(long, value_parser = super::validation::validate_build_status)]
    pub status: BuildStatus,

    /// Completion time as 'YYYY-MM-DD HH:MM:SS' (default: now)
    #[arg(long, value_parser = super::validation::validate_timestamp)]
    pub timestamp: Option<DateTime>,

    /// Recipients to use instead of notification.recipients
    #[arg(long)]
    pub recipients: Option<String>,

    /// Make the console sender fail with this text
    #[arg(long, value_name = "TEXT")]
    pub fail_with: Option<String>,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use jiff::civil::date;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_required() {
        let result = Cli::try_parse_from(["sms-notifier"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["sms-notifier", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_notify_command() {
        let cli = Cli::try_parse_from([
            "sms-notifier",
            "notify",
            "--name",
            "MyProject",
            "--status",
            "failure",
            "--timestamp",
            "2013-05-01 10:00:00",
        ])
        .unwrap();

        match cli.command {
            Commands::Notify(args) => {
                assert_eq!(args.name, "MyProject");
                assert_eq!(args.status, BuildStatus::Failure);
                assert_eq!(args.timestamp, Some(date(2013, 5, 1).at(10, 0, 0, 0)));
                assert!(args.recipients.is_none());
                assert!(args.fail_with.is_none());
            }
            other => panic!("Expected Notify command, got {:?}", other),
        }
    }

    #[test]
    fn test_notify_rejects_unknown_status() {
        let result = Cli::try_parse_from([
            "sms-notifier",
            "notify",
            "--name",
            "MyProject",
            "--status",
            "green",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_command() {
        let cli =
            Cli::try_parse_from(["sms-notifier", "check", "+6591234567", "--explain"]).unwrap();
        match cli.command {
            Commands::Check {
                recipients,
                explain,
            } => {
                assert_eq!(recipients.as_deref(), Some("+6591234567"));
                assert!(explain);
            }
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["sms-notifier", "-v", "--env", "prod", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.env, Some(Environment::Production)));
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["sms-notifier", "--verbose", "--quiet", "check"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
