//! Build-completion notification dispatch.
//!
//! Decides whether a finished build warrants an SMS, composes the message
//! and hands it to an [`SmsSender`]. Nothing raised in here reaches the
//! caller: failures become build log lines and, for delivery failures, a
//! request to mark the build as unstable.

use async_trait::async_trait;
use std::sync::Arc;

use super::listener::BuildListener;
use super::message::compose_for;
use super::provider::{SmsSender, SmsSenderFactory};
use super::recipients::parse_recipients;
use crate::error::{AppError, AppResult};
use crate::models::notification::is_blank;
use crate::models::{BuildOutcome, DispatchEffect, DispatchOutcome, NotificationConfig, SmsCredentials};

/// A post-build step a host calls once per finished build
#[async_trait]
pub trait NotificationStep: Send + Sync {
    /// Handles one build completion
    ///
    /// # Arguments
    /// * `outcome` - Status, display name and completion time of the build
    /// * `config` - Notification settings read for this call only
    /// * `listener` - Sink for lines that belong in the build log
    ///
    /// # Returns
    /// The effect the host should apply; never an error
    async fn on_build_complete(
        &self,
        outcome: &BuildOutcome,
        config: &NotificationConfig,
        listener: &dyn BuildListener,
    ) -> DispatchEffect;
}

/// Sends an SMS for failed and unstable builds
#[derive(Clone)]
pub struct NotificationDispatcher {
    factory: Arc<dyn SmsSenderFactory>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher that opens a sender per dispatch
    ///
    /// # Arguments
    /// * `factory` - Builds a sender from the configured credentials
    pub fn new(factory: impl SmsSenderFactory + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Creates a dispatcher that always uses the same sender
    pub fn with_sender(sender: Arc<dyn SmsSender>) -> Self {
        Self::new(move |_: &SmsCredentials| sender.clone())
    }

    async fn dispatch(
        &self,
        outcome: &BuildOutcome,
        config: &NotificationConfig,
    ) -> AppResult<DispatchOutcome> {
        let recipients = match config.recipients.as_deref() {
            Some(recipients) if !is_blank(Some(recipients)) => recipients,
            _ => return Err(AppError::NoRecipients),
        };

        let credentials = config.credentials().ok_or(AppError::MissingCredentials)?;

        let message = compose_for(outcome);
        let recipients = parse_recipients(recipients);

        let sender = self.factory.create(&credentials);
        tracing::debug!(
            sender = sender.name(),
            recipients = recipients.len(),
            "Sending SMS notification"
        );

        sender
            .send_bulk(&recipients, &message)
            .await
            .map_err(|e| AppError::delivery(sender.name(), e))?;

        Ok(DispatchOutcome::Sent {
            recipients: recipients.len(),
            message,
        })
    }
}

#[async_trait]
impl NotificationStep for NotificationDispatcher {
    async fn on_build_complete(
        &self,
        outcome: &BuildOutcome,
        config: &NotificationConfig,
        listener: &dyn BuildListener,
    ) -> DispatchEffect {
        if !outcome.status.needs_notification() {
            tracing::debug!(
                build = %outcome.display_name,
                status = %outcome.status,
                "Build status does not need an SMS notification"
            );
            return DispatchEffect::new(DispatchOutcome::NotRequired);
        }

        match self.dispatch(outcome, config).await {
            Ok(sent) => {
                tracing::info!(build = %outcome.display_name, "SMS notification sent");
                DispatchEffect::new(sent)
            }
            Err(e) => {
                listener.error(&e.to_string());

                if e.is_soft() {
                    return DispatchEffect::new(DispatchOutcome::Skipped {
                        reason: e.to_string(),
                    });
                }

                let requested = e.requested_status();
                let error = match e {
                    AppError::Delivery { message, .. } => message,
                    other => other.to_string(),
                };
                tracing::warn!(
                    build = %outcome.display_name,
                    requested = ?requested,
                    "SMS delivery failed"
                );

                let effect = DispatchEffect::new(DispatchOutcome::Failed { error });
                match requested {
                    Some(status) => effect.with_requested_status(status),
                    None => effect,
                }
            }
        }
    }
}
