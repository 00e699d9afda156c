//! Check command handler
//!
//! Runs the configuration-time recipient check against a recipient list.

use crate::config::settings::Settings;
use crate::services::notifications::{FormValidation, check_recipients, explain_recipients};

/// Handler for the check command
pub struct CheckCommandHandler {
    settings: Settings,
}

impl CheckCommandHandler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Recipients given on the command line win over the configured ones
    pub fn recipients<'a>(&'a self, override_value: Option<&'a str>) -> Option<&'a str> {
        override_value.or(self.settings.notification.recipients.as_deref())
    }

    /// Check the recipients and print the verdict
    pub fn execute(&self, recipients: Option<&str>, explain: bool) -> FormValidation {
        let recipients = self.recipients(recipients);
        let verdict = check_recipients(recipients);

        if explain && let Some(raw) = recipients {
            for line in Self::explain_lines(raw) {
                println!("{}", line);
            }
        }

        println!("{}", verdict);
        verdict
    }

    fn explain_lines(raw: &str) -> Vec<String> {
        explain_recipients(raw)
            .into_iter()
            .map(|(recipient, verdict)| match verdict {
                Ok(()) => format!("✓ {}", recipient),
                Err(issue) => format!("✗ '{}': {}", recipient, issue),
            })
            .collect()
    }
}
