//! SMS message composition.

use jiff::civil::DateTime;

use crate::models::BuildOutcome;

pub const MESSAGE_PREFIX: &str = "Build failed: ";

/// Messages longer than this are rebuilt with a shortened name
pub const MAX_MESSAGE_LENGTH: usize = 150;

/// Number of name characters kept when shortening
pub const TRUNCATED_NAME_LENGTH: usize = 100;

const ELLIPSIS: &str = "... ";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`, 24-hour, zero padded.
pub fn format_timestamp(timestamp: &DateTime) -> String {
    timestamp.strftime(TIMESTAMP_FORMAT).to_string()
}

/// Builds the notification text for a finished build.
///
/// Lengths are counted in characters. When the full message is too long the
/// display name is cut to its first 100 characters and followed by `"... "`;
/// the rest of the message is kept intact.
pub fn compose_message(display_name: &str, timestamp: &DateTime) -> String {
    let when = format_timestamp(timestamp);
    let message = format!("{}{} at {}", MESSAGE_PREFIX, display_name, when);

    if message.chars().count() <= MAX_MESSAGE_LENGTH {
        return message;
    }

    let short_name: String = display_name.chars().take(TRUNCATED_NAME_LENGTH).collect();
    format!("{}{}{} at {}", MESSAGE_PREFIX, short_name, ELLIPSIS, when)
}

pub fn compose_for(outcome: &BuildOutcome) -> String {
    compose_message(&outcome.display_name, &outcome.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use proptest::prelude::*;

    fn sample_time() -> DateTime {
        date(2013, 5, 1).at(10, 0, 0, 0)
    }

    #[test]
    fn test_compose_exact_format() {
        assert_eq!(
            compose_message("MyProject", &sample_time()),
            "Build failed: MyProject at 2013-05-01 10:00:00"
        );
    }

    #[test]
    fn test_timestamp_zero_padded_24h() {
        let t = date(2024, 1, 2).at(23, 4, 5, 0);
        assert_eq!(format_timestamp(&t), "2024-01-02 23:04:05");
        let t = date(2024, 12, 31).at(0, 0, 9, 0);
        assert_eq!(format_timestamp(&t), "2024-12-31 00:00:09");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let name: String = "abcdefghij".repeat(20);
        assert_eq!(name.len(), 200);

        let message = compose_message(&name, &sample_time());
        let expected = format!(
            "Build failed: {}...  at 2013-05-01 10:00:00",
            &name[..100]
        );
        assert_eq!(message, expected);
        assert_eq!(message.chars().count(), 141);
        assert!(message.chars().count() <= MAX_MESSAGE_LENGTH);
        assert_eq!(message, compose_message(&name, &sample_time()));
    }

    #[test]
    fn test_threshold_boundary() {
        // 14 prefix + 4 " at " + 19 timestamp leaves 113 characters for the name
        let fits: String = "x".repeat(113);
        let message = compose_message(&fits, &sample_time());
        assert_eq!(message.chars().count(), 150);
        assert!(!message.contains("..."));

        let over: String = "x".repeat(114);
        let message = compose_message(&over, &sample_time());
        assert!(message.contains("x...  at "));
        assert_eq!(message.chars().count(), 141);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let name: String = "é".repeat(120);
        let message = compose_message(&name, &sample_time());
        let expected = format!("Build failed: {}...  at 2013-05-01 10:00:00", "é".repeat(100));
        assert_eq!(message, expected);
    }

    proptest! {
        #[test]
        fn prop_message_never_exceeds_limit(name in ".{0,300}") {
            let message = compose_message(&name, &sample_time());
            prop_assert!(message.chars().count() <= MAX_MESSAGE_LENGTH);
            prop_assert!(message.starts_with(MESSAGE_PREFIX));
            prop_assert!(message.ends_with(" at 2013-05-01 10:00:00"));
        }
    }
}
