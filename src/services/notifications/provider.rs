//! Core SMS sender trait and types.
//!
//! This module provides the abstraction over SMS providers, so the dispatch
//! logic never depends on a specific vendor SDK or wire protocol.

use crate::models::SmsCredentials;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Error raised by an SMS transport
///
/// The message is the transport's own text and is passed through verbatim
/// into the build log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SmsError {
    message: String,
}

impl SmsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Trait for SMS transports
///
/// All senders must be Send + Sync so a single dispatcher can serve
/// concurrent build completions.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct VendorSender {
///     client: VendorClient,
/// }
///
/// #[async_trait]
/// impl SmsSender for VendorSender {
///     async fn send_bulk(&self, recipients: &[String], message: &str) -> Result<(), SmsError> {
///         self.client.bulk(recipients, message).await.map_err(|e| SmsError::new(e.to_string()))
///     }
///
///     fn name(&self) -> &'static str {
///         "vendor"
///     }
/// }
/// ```
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Sends one message to every recipient, in order
    ///
    /// # Arguments
    /// * `recipients` - Recipient numbers exactly as configured, empty tokens included
    /// * `message` - The message body
    async fn send_bulk(&self, recipients: &[String], message: &str) -> Result<(), SmsError>;

    /// Returns the sender name for logging/debugging
    fn name(&self) -> &'static str;
}

/// Opens a sender session for a set of credentials
///
/// Called once per dispatch, after the credentials have been checked.
/// Closures of the form `Fn(&SmsCredentials) -> Arc<dyn SmsSender>` implement
/// this trait.
pub trait SmsSenderFactory: Send + Sync {
    fn create(&self, credentials: &SmsCredentials) -> Arc<dyn SmsSender>;
}

impl<F> SmsSenderFactory for F
where
    F: Fn(&SmsCredentials) -> Arc<dyn SmsSender> + Send + Sync,
{
    fn create(&self, credentials: &SmsCredentials) -> Arc<dyn SmsSender> {
        self(credentials)
    }
}
