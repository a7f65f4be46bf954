//! Validation rules: one function per predicate, paired with the
//! [`FieldError`] kind it reports.
//!
//! Forms run these in declaration order per field and collect failures into
//! a [`FormErrors`](crate::FormErrors). A failed [`required`] check is
//! expected to short-circuit the remaining rules for that field.
//!
//! Lengths are counted in characters, not bytes, so multi-byte input is
//! measured the way a user would count it.

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::field::FieldError;

/// The value must be non-empty.
pub fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// The value must parse as an email address (WHATWG syntax).
pub fn valid_email(value: &str) -> Result<(), FieldError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// The value must be at least `min` characters long.
pub fn min_chars(value: &str, min: usize) -> Result<(), FieldError> {
    let actual = value.chars().count();
    if actual < min {
        return Err(FieldError::TooShort { min, actual });
    }
    Ok(())
}

/// The value must be at most `max` characters long.
pub fn max_chars(value: &str, max: usize) -> Result<(), FieldError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(FieldError::TooLong { max, actual });
    }
    Ok(())
}

/// The value must parse as a decimal number.
pub fn parse_decimal(value: &str) -> Result<Decimal, FieldError> {
    value.parse::<Decimal>().map_err(|_| FieldError::NotANumber)
}

/// The value must parse as a whole number.
pub fn parse_integer(value: &str) -> Result<i64, FieldError> {
    value.parse::<i64>().map_err(|_| FieldError::NotAnInteger)
}

/// Checkbox semantics: absent means unchecked; a present value is true
/// unless it spells a false-ish literal.
pub fn checkbox(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_only() {
        assert_eq!(required(""), Err(FieldError::Required));
        assert!(required("x").is_ok());
    }

    #[test]
    fn email_rule_accepts_plain_addresses() {
        assert!(valid_email("a@b.com").is_ok());
        assert!(valid_email("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn email_rule_rejects_malformed_strings() {
        for bad in ["not-an-email", "missing@tld@", "@nouser.com", "spaces in@mail.com"] {
            assert_eq!(valid_email(bad), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        // "héllo wörld" is 11 chars but more bytes.
        let text = "h\u{e9}llo w\u{f6}rld";
        assert!(min_chars(text, 10).is_ok());
        assert!(max_chars(text, 11).is_ok());
        assert_eq!(
            min_chars(text, 12),
            Err(FieldError::TooShort { min: 12, actual: 11 })
        );
    }

    #[test]
    fn decimal_rule_parses_prices() {
        assert_eq!(parse_decimal("9.99"), Ok(Decimal::new(999, 2)));
        assert_eq!(parse_decimal("10"), Ok(Decimal::new(10, 0)));
        assert_eq!(parse_decimal("nine"), Err(FieldError::NotANumber));
    }

    #[test]
    fn integer_rule_rejects_fractions() {
        assert_eq!(parse_integer("5"), Ok(5));
        assert_eq!(parse_integer("-2"), Ok(-2));
        assert_eq!(parse_integer("1.5"), Err(FieldError::NotAnInteger));
        assert_eq!(parse_integer("five"), Err(FieldError::NotAnInteger));
    }

    #[test]
    fn checkbox_is_false_when_absent_and_true_when_ticked() {
        assert!(!checkbox(None));
        assert!(checkbox(Some("on")));
        assert!(checkbox(Some("true")));
        assert!(!checkbox(Some("false")));
        assert!(!checkbox(Some("0")));
        assert!(!checkbox(Some("")));
    }
}
