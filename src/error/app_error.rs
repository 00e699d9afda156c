use crate::models::BuildStatus;
use crate::services::notifications::SmsError;
use thiserror::Error;

/// Application-wide error type for the notifier.
///
/// The first three variants make up the dispatch taxonomy: missing
/// configuration is a soft failure that leaves the build untouched, while a
/// delivery failure asks the host to mark the build as unstable.
#[derive(Error, Debug)]
pub enum AppError {
    /// No recipients are configured
    #[error("No recipients")]
    NoRecipients,

    /// Application id or access token is missing
    #[error("SMS credentials not configured; cannot send SMS notification")]
    MissingCredentials,

    /// The transport rejected or failed the bulk send
    #[error("Failed to send SMS notification: {message}")]
    Delivery { sender: String, message: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wraps a transport error, keeping its text verbatim.
    pub fn delivery(sender: &str, error: SmsError) -> Self {
        AppError::Delivery {
            sender: sender.to_string(),
            message: error.to_string(),
        }
    }

    /// Soft failures are reported but never change the build status.
    pub fn is_soft(&self) -> bool {
        matches!(self, AppError::NoRecipients | AppError::MissingCredentials)
    }

    /// Status the host should record because of this error, if any.
    pub fn requested_status(&self) -> Option<BuildStatus> {
        match self {
            AppError::Delivery { .. } => Some(BuildStatus::Unstable),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        AppError::Configuration {
            key: "settings".to_string(),
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
