//! Configuration validation logic
//!
//! Logger settings must be valid for the process to start. Notification
//! settings are never rejected here: a blank recipient list or missing
//! credentials only skips dispatch, so they are reported as warnings.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, Settings};
use crate::models::NotificationConfig;
use crate::services::notifications::{FormValidation, check_recipients};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - At least one output must be enabled
    /// - File settings must be valid when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl FileSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path cannot be empty when file output is enabled.",
            ));
        }

        self.parse_format().map(|_| ())
    }
}

impl NotificationConfig {
    /// Operator-facing notes about incomplete notification settings
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.credentials().is_none() {
            warnings.push(
                "notification.app_id or notification.access_token is not set; SMS notifications will be skipped"
                    .to_string(),
            );
        }

        match check_recipients(self.recipients.as_deref()) {
            FormValidation::Ok => {}
            FormValidation::Warning(message) | FormValidation::Error(message) => {
                warnings.push(format!("notification.recipients: {}", message));
            }
        }

        warnings
    }
}

impl Settings {
    /// Validate the complete settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty.",
            ));
        }

        self.logger.validate()
    }
}
