//! Notification models.
//!
//! This module provides the configuration value handed to every dispatch and
//! the effect value a dispatch hands back to the host.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::build::BuildStatus;

/// SMS notification settings owned by the host
///
/// The notifier only reads this value. Every field may be missing; blank
/// values are reported at dispatch time instead of being rejected on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Application id issued by the SMS provider
    #[serde(default)]
    pub app_id: Option<String>,

    /// Access token issued by the SMS provider
    #[serde(default)]
    pub access_token: Option<String>,

    /// Comma separated recipient phone numbers
    #[serde(default)]
    pub recipients: Option<String>,
}

impl NotificationConfig {
    pub fn new(
        app_id: impl Into<String>,
        access_token: impl Into<String>,
        recipients: impl Into<String>,
    ) -> Self {
        Self {
            app_id: Some(app_id.into()),
            access_token: Some(access_token.into()),
            recipients: Some(recipients.into()),
        }
    }

    pub fn has_recipients(&self) -> bool {
        !is_blank(self.recipients.as_deref())
    }

    /// Returns the credentials when both parts are present and not blank
    pub fn credentials(&self) -> Option<SmsCredentials> {
        match (self.app_id.as_deref(), self.access_token.as_deref()) {
            (Some(app_id), Some(access_token)) if !is_blank(Some(app_id)) && !is_blank(Some(access_token)) => {
                Some(SmsCredentials {
                    app_id: app_id.to_string(),
                    access_token: access_token.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Credentials used to open a session with the SMS provider
#[derive(Clone, PartialEq, Eq)]
pub struct SmsCredentials {
    pub app_id: String,
    pub access_token: String,
}

impl fmt::Debug for SmsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsCredentials")
            .field("app_id", &self.app_id)
            .field("access_token", &"***")
            .finish()
    }
}

/// What a dispatch call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Build status did not call for a notification
    NotRequired,
    /// A notification was due but configuration was incomplete
    Skipped { reason: String },
    /// The sender accepted the message
    Sent { recipients: usize, message: String },
    /// The sender failed; the text is the transport's own message
    Failed { error: String },
}

/// Result of handling one build completion
///
/// `requested_status` is the status the host should record, combined with
/// the current one through [`BuildStatus::combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEffect {
    pub outcome: DispatchOutcome,
    pub requested_status: Option<BuildStatus>,
}

impl DispatchEffect {
    pub fn new(outcome: DispatchOutcome) -> Self {
        Self {
            outcome,
            requested_status: None,
        }
    }

    pub fn with_requested_status(mut self, status: BuildStatus) -> Self {
        self.requested_status = Some(status);
        self
    }

    /// Always true; delivery failures are visible only through the
    /// requested status and the build log.
    pub fn handled(&self) -> bool {
        true
    }

    /// Status the build should end up with after this effect
    pub fn apply_to(&self, current: BuildStatus) -> BuildStatus {
        match self.requested_status {
            Some(requested) => current.combine(requested),
            None => current,
        }
    }
}

/// `None`, empty, or whitespace only
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
