//! Notify command handler
//!
//! Runs one build completion through the dispatcher with the console sender.

use std::sync::Arc;

use jiff::Zoned;

use crate::cli::parser::NotifyArgs;
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::models::{BuildOutcome, BuildStatus, DispatchEffect, SmsCredentials};
use crate::services::notifications::{
    ConsoleSender, NotificationDispatcher, NotificationStep, SmsSender, TracingListener,
};

/// What happened to a build handed to the notify command
#[derive(Debug, Clone)]
pub struct NotifyReport {
    pub outcome: BuildOutcome,
    pub effect: DispatchEffect,
    pub final_status: BuildStatus,
}

/// Handler for the notify command
pub struct NotifyCommandHandler {
    settings: Settings,
}

impl NotifyCommandHandler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch one build completion
    ///
    /// # Errors
    /// Only argument problems are errors; every dispatch failure is reported
    /// through the returned effect.
    pub async fn execute(&self, args: &NotifyArgs) -> AppResult<NotifyReport> {
        if args.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                reason: "Build name cannot be empty".to_string(),
            });
        }

        let mut config = self.settings.notification.clone();
        if let Some(recipients) = &args.recipients {
            config.recipients = Some(recipients.clone());
        }

        let timestamp = args
            .timestamp
            .unwrap_or_else(|| Zoned::now().datetime());
        let outcome = BuildOutcome::new(args.status, args.name.clone(), timestamp);

        let fail_with = args.fail_with.clone();
        let dispatcher =
            NotificationDispatcher::new(move |credentials: &SmsCredentials| -> Arc<dyn SmsSender> {
                let sender = ConsoleSender::new(credentials);
                match &fail_with {
                    Some(text) => Arc::new(sender.failing_with(text.clone())),
                    None => Arc::new(sender),
                }
            });

        let listener = TracingListener::for_build(outcome.display_name.clone());
        let effect = dispatcher.on_build_complete(&outcome, &config, &listener).await;
        let final_status = effect.apply_to(outcome.status);

        Ok(NotifyReport {
            outcome,
            effect,
            final_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DispatchOutcome, NotificationConfig};
    use jiff::civil::date;

    fn settings() -> Settings {
        Settings {
            notification: NotificationConfig::new("app", "token", "+6591234567"),
            ..Settings::default()
        }
    }

    fn args(status: BuildStatus) -> NotifyArgs {
        NotifyArgs {
            name: "MyProject".to_string(),
            status,
            timestamp: Some(date(2013, 5, 1).at(10, 0, 0, 0)),
            recipients: None,
            fail_with: None,
        }
    }

    #[tokio::test]
    async fn test_failed_build_is_sent() {
        let report = NotifyCommandHandler::new(settings())
            .execute(&args(BuildStatus::Failure))
            .await
            .unwrap();

        assert_eq!(report.final_status, BuildStatus::Failure);
        assert_eq!(
            report.effect.outcome,
            DispatchOutcome::Sent {
                recipients: 1,
                message: "Build failed: MyProject at 2013-05-01 10:00:00".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_delivery_failure_keeps_unstable() {
        let mut args = args(BuildStatus::Unstable);
        args.fail_with = Some("Quota exceeded".to_string());

        let report = NotifyCommandHandler::new(settings()).execute(&args).await.unwrap();
        assert_eq!(report.effect.requested_status, Some(BuildStatus::Unstable));
        assert_eq!(report.final_status, BuildStatus::Unstable);
    }

    #[tokio::test]
    async fn test_delivery_failure_keeps_failure() {
        let mut args = args(BuildStatus::Failure);
        args.fail_with = Some("Quota exceeded".to_string());

        let report = NotifyCommandHandler::new(settings()).execute(&args).await.unwrap();
        assert_eq!(report.effect.requested_status, Some(BuildStatus::Unstable));
        assert_eq!(report.final_status, BuildStatus::Failure);
    }

    #[tokio::test]
    async fn test_recipients_override() {
        let mut args = args(BuildStatus::Failure);
        args.recipients = Some("+6500000001, +6500000002,".to_string());

        let report = NotifyCommandHandler::new(settings()).execute(&args).await.unwrap();
        assert!(matches!(
            report.effect.outcome,
            DispatchOutcome::Sent { recipients: 3, .. }
        ));
    }

    #[tokio::test]
    async fn test_success_is_not_notified() {
        let report = NotifyCommandHandler::new(settings())
            .execute(&args(BuildStatus::Success))
            .await
            .unwrap();
        assert_eq!(report.effect.outcome, DispatchOutcome::NotRequired);
        assert_eq!(report.final_status, BuildStatus::Success);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let mut args = args(BuildStatus::Failure);
        args.name = " ".to_string();
        let result = NotifyCommandHandler::new(settings()).execute(&args).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
