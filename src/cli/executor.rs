//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::process::ExitCode;

use super::handlers::{CheckCommandHandler, NotifyCommandHandler, NotifyReport};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::models::DispatchOutcome;

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns errors from command handlers. Rejected recipient lists are not
/// errors; they map to exit status 1.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<ExitCode> {
    match &cli.command {
        Commands::Notify(args) => {
            let report = NotifyCommandHandler::new(settings).execute(args).await?;
            println!("{}", describe_report(&report));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            recipients,
            explain,
        } => {
            let verdict = CheckCommandHandler::new(settings).execute(recipients.as_deref(), *explain);
            if verdict.is_error() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn describe_report(report: &NotifyReport) -> String {
    let summary = match &report.effect.outcome {
        DispatchOutcome::NotRequired => format!(
            "Build '{}' finished with {}; no notification required",
            report.outcome.display_name, report.outcome.status
        ),
        DispatchOutcome::Skipped { reason } => format!("Notification skipped: {}", reason),
        DispatchOutcome::Sent {
            recipients,
            message,
        } => format!("Sent to {} recipient(s): {}", recipients, message),
        DispatchOutcome::Failed { error } => format!("Notification failed: {}", error),
    };

    format!("{}\nBuild status: {}", summary, report.final_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationConfig;
    use clap::Parser;

    fn settings() -> Settings {
        Settings {
            notification: NotificationConfig::new("app", "token", "+6591234567"),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_execute_notify() {
        let cli = Cli::try_parse_from([
            "sms-notifier",
            "notify",
            "--name",
            "nightly",
            "--status",
            "failure",
        ])
        .unwrap();

        let code = execute_command(&cli, settings()).await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_execute_check_exit_codes() {
        let cli = Cli::try_parse_from(["sms-notifier", "check"]).unwrap();
        assert_eq!(execute_command(&cli, settings()).await.unwrap(), ExitCode::SUCCESS);

        let cli = Cli::try_parse_from(["sms-notifier", "check", "+65 9123 4567,12345"]).unwrap();
        assert_eq!(execute_command(&cli, settings()).await.unwrap(), ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_describe_failed_report() {
        let cli = Cli::try_parse_from([
            "sms-notifier",
            "notify",
            "--name",
            "nightly",
            "--status",
            "success",
        ])
        .unwrap();
        let Commands::Notify(mut args) = cli.command else {
            panic!("Expected Notify command");
        };
        args.status = crate::models::BuildStatus::Failure;
        args.fail_with = Some("Quota exceeded".to_string());

        let report = NotifyCommandHandler::new(settings()).execute(&args).await.unwrap();
        let text = describe_report(&report);
        assert!(text.starts_with("Notification failed: Quota exceeded"));
        assert!(text.ends_with("Build status: FAILURE"));
    }
}
