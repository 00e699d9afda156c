//! Build outcome models supplied by the host build system.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Terminal status of one build run
///
/// Variants are declared from best to worst so the derived ordering is the
/// severity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
}

impl BuildStatus {
    /// Whether a build in this status warrants an SMS notification
    pub fn needs_notification(&self) -> bool {
        matches!(self, BuildStatus::Failure | BuildStatus::Unstable)
    }

    /// Returns the worse of the two statuses.
    ///
    /// A host applies requested status changes through this, so a status can
    /// only ever get worse.
    pub fn combine(self, other: BuildStatus) -> BuildStatus {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Unstable => "UNSTABLE",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::NotBuilt => "NOT_BUILT",
            BuildStatus::Aborted => "ABORTED",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "success" => Ok(BuildStatus::Success),
            "unstable" => Ok(BuildStatus::Unstable),
            "failure" | "failed" => Ok(BuildStatus::Failure),
            "not_built" => Ok(BuildStatus::NotBuilt),
            "aborted" => Ok(BuildStatus::Aborted),
            _ => Err(AppError::Validation {
                field: "status".to_string(),
                reason: format!(
                    "Invalid build status '{}'. Valid values are: success, unstable, failure, not_built, aborted",
                    s
                ),
            }),
        }
    }
}

/// The fact a host hands over once a build has finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub status: BuildStatus,
    /// Human-readable project or build name
    pub display_name: String,
    /// Completion time, already in the zone the message should show
    pub timestamp: DateTime,
}

impl BuildOutcome {
    pub fn new(status: BuildStatus, display_name: impl Into<String>, timestamp: DateTime) -> Self {
        Self {
            status,
            display_name: display_name.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_failure_and_unstable_notify() {
        assert!(BuildStatus::Failure.needs_notification());
        assert!(BuildStatus::Unstable.needs_notification());
        assert!(!BuildStatus::Success.needs_notification());
        assert!(!BuildStatus::NotBuilt.needs_notification());
        assert!(!BuildStatus::Aborted.needs_notification());
    }

    #[test]
    fn test_combine_never_improves() {
        assert_eq!(BuildStatus::Success.combine(BuildStatus::Unstable), BuildStatus::Unstable);
        assert_eq!(BuildStatus::Failure.combine(BuildStatus::Unstable), BuildStatus::Failure);
        assert_eq!(BuildStatus::Unstable.combine(BuildStatus::Unstable), BuildStatus::Unstable);
        assert_eq!(BuildStatus::Aborted.combine(BuildStatus::Success), BuildStatus::Aborted);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("FAILURE".parse::<BuildStatus>().unwrap(), BuildStatus::Failure);
        assert_eq!("failed".parse::<BuildStatus>().unwrap(), BuildStatus::Failure);
        assert_eq!("not-built".parse::<BuildStatus>().unwrap(), BuildStatus::NotBuilt);
        assert_eq!("Unstable".parse::<BuildStatus>().unwrap(), BuildStatus::Unstable);
        assert!("broken".parse::<BuildStatus>().is_err());
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in [
            BuildStatus::Success,
            BuildStatus::Unstable,
            BuildStatus::Failure,
            BuildStatus::NotBuilt,
            BuildStatus::Aborted,
        ] {
            assert_eq!(status.to_string().parse::<BuildStatus>().unwrap(), status);
        }
    }
}
