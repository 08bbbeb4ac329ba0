//! Shape checks for captured numeric values.
//!
//! A pattern match is not enough to store a value: a capture that fails the
//! field's shape check is discarded, leaving the field absent rather than
//! holding corrupt data.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a captured amount: ASCII digits with an optional decimal point.
///
/// Returns `None` for anything else, including values that overflow the
/// decimal range.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// True when the value is a non-empty ASCII digit string.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1250.00"), Some(Decimal::new(125000, 2)));
        assert_eq!(parse_amount("0.06"), Some(Decimal::new(6, 2)));
        assert_eq!(parse_amount("45"), Some(Decimal::new(45, 0)));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("12a.50"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("-5.00"), None);
    }

    #[test]
    fn test_parse_amount_rejects_overflow() {
        assert_eq!(parse_amount("99999999999999999999999999999999"), None);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("01234567"));
        assert!(!is_digits(""));
        assert!(!is_digits("123 456"));
        assert!(!is_digits("12.34"));
    }
}
