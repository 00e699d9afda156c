//! Recipient list parsing and configuration-time checks.

use std::fmt;

use crate::models::notification::is_blank;
use crate::utils::phone::{self, PhoneNumberIssue};

pub const MISSING_RECIPIENTS_WARNING: &str = "You must fill recipients' numbers!";
pub const INVALID_RECIPIENTS_ERROR: &str = "Formats of some recipients' numbers are invalid.";

/// Splits a configured recipient string into recipient numbers.
///
/// Every whitespace character is removed first, including whitespace between
/// digits, then the rest is split on `,`. Empty tokens are kept; they are
/// passed on to the sender as they are.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    strip_whitespace(raw).split(',').map(str::to_string).collect()
}

fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Outcome of a configuration form check, shown to an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidation {
    Ok,
    Warning(String),
    Error(String),
}

impl FormValidation {
    pub fn is_error(&self) -> bool {
        matches!(self, FormValidation::Error(_))
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValidation::Ok => write!(f, "OK"),
            FormValidation::Warning(message) => write!(f, "Warning: {}", message),
            FormValidation::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// Checks a recipient string the way the configuration form does.
///
/// This is informational only; dispatch never consults it.
pub fn check_recipients(raw: Option<&str>) -> FormValidation {
    let raw = match raw {
        Some(raw) if !is_blank(Some(raw)) => raw,
        _ => return FormValidation::Warning(MISSING_RECIPIENTS_WARNING.to_string()),
    };

    let all_valid = parse_recipients(raw)
        .iter()
        .all(|recipient| phone::validate_default(Some(recipient)));

    if all_valid {
        FormValidation::Ok
    } else {
        FormValidation::Error(INVALID_RECIPIENTS_ERROR.to_string())
    }
}

/// Per-token diagnostics for a recipient string, in configured order.
pub fn explain_recipients(raw: &str) -> Vec<(String, Result<(), PhoneNumberIssue>)> {
    parse_recipients(raw)
        .into_iter()
        .map(|recipient| {
            let verdict = phone::check(Some(&recipient), false);
            (recipient, verdict)
        })
        .collect()
}
