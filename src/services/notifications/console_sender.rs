//! Console SMS sender.
//!
//! Writes each message to the log instead of handing it to a provider.
//! The command-line front end uses it to rehearse dispatches end to end.

use super::provider::{SmsError, SmsSender};
use crate::models::SmsCredentials;
use async_trait::async_trait;

/// Sender that logs every message it is asked to deliver
///
/// # Example
/// ```ignore
/// let sender = ConsoleSender::new(&credentials);
/// sender.send_bulk(&["+6591234567".to_string()], "Build failed: demo").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleSender {
    app_id: String,
    failure: Option<String>,
}

impl ConsoleSender {
    pub fn new(credentials: &SmsCredentials) -> Self {
        Self {
            app_id: credentials.app_id.clone(),
            failure: None,
        }
    }

    /// Makes every send fail with the given transport text
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl SmsSender for ConsoleSender {
    async fn send_bulk(&self, recipients: &[String], message: &str) -> Result<(), SmsError> {
        if let Some(failure) = &self.failure {
            return Err(SmsError::new(failure.clone()));
        }

        for recipient in recipients {
            tracing::info!(
                app_id = %self.app_id,
                recipient = %recipient,
                "SMS: {}",
                message
            );
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
