//! Phone number validation for SMS recipients.
//!
//! Accepted numbers are E.164-like: a leading `+` followed only by ASCII
//! digits, 5 to 15 of them unless the length check is skipped.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const PHONE_NUMBER_MIN_LENGTH: usize = 5;
pub const PHONE_NUMBER_MAX_LENGTH: usize = 15;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]").expect("non-digit pattern is valid"));

/// Validates a phone number with the length check enabled.
pub fn validate_default(raw: Option<&str>) -> bool {
    validate(raw, false)
}

/// Returns whether `raw` is an acceptable phone number literal.
///
/// The emptiness check looks at the trimmed value, every other check looks
/// at the value as given, so `" +12345"` is rejected.
pub fn validate(raw: Option<&str>, skip_length_check: bool) -> bool {
    check(raw, skip_length_check).is_ok()
}

/// Reason a recipient was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneNumberIssue {
    Empty,
    MissingPlus,
    InvalidChar(char),
    TooShort(usize),
    TooLong(usize),
}

impl fmt::Display for PhoneNumberIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneNumberIssue::Empty => write!(f, "number is empty"),
            PhoneNumberIssue::MissingPlus => write!(f, "number must start with '+'"),
            PhoneNumberIssue::InvalidChar(c) => write!(f, "invalid character '{}'", c),
            PhoneNumberIssue::TooShort(len) => write!(
                f,
                "{} digits, at least {} required",
                len, PHONE_NUMBER_MIN_LENGTH
            ),
            PhoneNumberIssue::TooLong(len) => write!(
                f,
                "{} digits, at most {} allowed",
                len, PHONE_NUMBER_MAX_LENGTH
            ),
        }
    }
}

/// Same rules as [`validate`], reporting the first rule that failed.
pub fn check(raw: Option<&str>, skip_length_check: bool) -> Result<(), PhoneNumberIssue> {
    let number = match raw {
        Some(number) if !number.trim().is_empty() => number,
        _ => return Err(PhoneNumberIssue::Empty),
    };

    let Some(digits) = number.strip_prefix('+') else {
        return Err(PhoneNumberIssue::MissingPlus);
    };

    if let Some(found) = find_non_digit_chars(digits) {
        // The regex matches exactly one character.
        let c = found.chars().next().unwrap_or_default();
        return Err(PhoneNumberIssue::InvalidChar(c));
    }

    if !skip_length_check {
        // Only ASCII digits remain, so byte length is the digit count.
        let len = digits.len();
        if len < PHONE_NUMBER_MIN_LENGTH {
            return Err(PhoneNumberIssue::TooShort(len));
        }
        if len > PHONE_NUMBER_MAX_LENGTH {
            return Err(PhoneNumberIssue::TooLong(len));
        }
    }

    Ok(())
}

pub fn has_invalid_chars(s: &str) -> bool {
    find_non_digit_chars(s).is_some()
}

/// Returns the first character of `s` that is not an ASCII digit.
pub fn find_non_digit_chars(s: &str) -> Option<&str> {
    NON_DIGIT.find(s).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_and_blank_rejected() {
        assert!(!validate(None, false));
        assert!(!validate(None, true));
        assert!(!validate(Some(""), false));
        assert!(!validate(Some("   "), true));
        assert!(!validate(Some("\t\n"), false));
    }

    #[test]
    fn test_plus_sign_required() {
        assert!(!validate(Some("12345"), false));
        assert!(!validate(Some("0065123456"), true));
        // Leading whitespace is not trimmed before the plus check
        assert!(!validate(Some(" +12345"), false));
        assert_eq!(check(Some(" +12345"), false), Err(PhoneNumberIssue::MissingPlus));
    }

    #[test]
    fn test_length_boundaries() {
        assert!(!validate(Some("+123"), false));
        assert!(validate(Some("+123"), true));
        assert!(validate(Some("+12345"), false));
        assert!(validate(Some("+123456789012345"), false));
        assert!(!validate(Some("+1234567890123456"), false));
        assert!(validate(Some("+1234567890123456"), true));
        assert_eq!(check(Some("+123"), false), Err(PhoneNumberIssue::TooShort(3)));
        assert_eq!(
            check(Some("+1234567890123456"), false),
            Err(PhoneNumberIssue::TooLong(16))
        );
    }

    #[test]
    fn test_default_overload_checks_length() {
        assert!(!validate_default(Some("+123")));
        assert!(validate_default(Some("+6591234567")));
    }

    #[test]
    fn test_plus_only() {
        assert!(!validate(Some("+"), false));
        assert!(validate(Some("+"), true));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!validate(Some("+12a45"), false));
        assert!(!validate(Some("+12a45"), true));
        assert!(!validate(Some("+12 345"), false));
        assert!(!validate(Some("+12345 "), false));
        assert!(!validate(Some("++12345"), false));
        // Non-ASCII digits are rejected
        assert!(!validate(Some("+١٢٣٤٥"), false));
        assert_eq!(check(Some("+12a45"), false), Err(PhoneNumberIssue::InvalidChar('a')));
    }

    #[test]
    fn test_find_non_digit_chars() {
        assert_eq!(find_non_digit_chars("12a45"), Some("a"));
        assert_eq!(find_non_digit_chars("1-2b"), Some("-"));
        assert_eq!(find_non_digit_chars("12345"), None);
        assert_eq!(find_non_digit_chars(""), None);
        assert_eq!(find_non_digit_chars("12é"), Some("é"));
        assert!(has_invalid_chars("+1"));
        assert!(!has_invalid_chars("0123456789"));
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            PhoneNumberIssue::InvalidChar('x').to_string(),
            "invalid character 'x'"
        );
        assert_eq!(
            PhoneNumberIssue::TooShort(3).to_string(),
            "3 digits, at least 5 required"
        );
    }

    proptest! {
        #[test]
        fn prop_blank_is_invalid(s in "[ \t\r\n]*", skip in any::<bool>()) {
            prop_assert!(!validate(Some(&s), skip));
        }

        #[test]
        fn prop_without_plus_is_invalid(s in "[^+].*", skip in any::<bool>()) {
            prop_assert!(!validate(Some(&s), skip));
        }

        #[test]
        fn prop_digit_count_decides(digits in "[0-9]{0,20}") {
            let number = format!("+{}", digits);
            let in_range = (PHONE_NUMBER_MIN_LENGTH..=PHONE_NUMBER_MAX_LENGTH).contains(&digits.len());
            prop_assert_eq!(validate(Some(&number), false), in_range);
            prop_assert!(validate(Some(&number), true));
        }

        #[test]
        fn prop_validate_matches_check(s in ".{0,20}", skip in any::<bool>()) {
            prop_assert_eq!(validate(Some(&s), skip), check(Some(&s), skip).is_ok());
        }
    }
}
