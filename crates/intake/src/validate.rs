//! Field validators.
//!
//! Each validator is a pure function over the raw field text and reports a
//! single failure reason. Callers that need every failure at once (the
//! submission flow) run all validators and collect the results; nothing
//! here short-circuits across fields.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Why a field failed validation.
///
/// The user-facing message for a failure depends on the field it is
/// attached to; see [`crate::fields::error_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ValidationError {
    /// Required field is empty (after trimming).
    EmptyField,
    /// Text contains a character outside the allowed class.
    InvalidCharacters,
    /// More than one of hyphen/apostrophe/period.
    TooManySpecialChars,
    /// Phone or email does not have the expected shape.
    InvalidFormat,
}

pub type ValidationResult = Result<(), ValidationError>;

fn is_allowed_name_char(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
        || c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '-' | '\'' | '.')
}

/// Validate a contact name.
///
/// Checks run in order: emptiness, character class, special-character
/// count. Cyrillic and Latin letters, digits, and whitespace are allowed
/// freely; hyphen, apostrophe, and period are allowed at most once in
/// total across the whole name.
pub fn validate_name(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if !trimmed.chars().all(is_allowed_name_char) {
        return Err(ValidationError::InvalidCharacters);
    }
    let specials = trimmed
        .chars()
        .filter(|c| matches!(c, '-' | '\'' | '.'))
        .count();
    if specials > 1 {
        return Err(ValidationError::TooManySpecialChars);
    }
    Ok(())
}

/// Shape check shared by both email variants: `local@domain.tld` with no
/// whitespace, exactly one `@`, and an interior dot in the domain.
fn email_shape_ok(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Validate a required email (newsletter subscribe box).
pub fn validate_email(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if !email_shape_ok(trimmed) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Validate an optional email (lead-capture modal). Empty text is fine;
/// non-empty text must still have the email shape.
pub fn validate_optional_email(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if !email_shape_ok(trimmed) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Validate a phone number in any formatting.
///
/// All non-digits are stripped first. Valid digit counts: exactly 10, or
/// exactly 11 with a leading `7` or `8` (country prefix).
pub fn validate_phone(text: &str) -> ValidationResult {
    let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Ok(()),
        11 if matches!(digits[0], '7' | '8') => Ok(()),
        _ => Err(ValidationError::InvalidFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_rejects_empty_and_whitespace_only() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyField));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyField));
    }

    #[test]
    fn name_accepts_letters_digits_and_one_special() {
        assert_eq!(validate_name("O'Brien"), Ok(()));
        assert_eq!(validate_name("Jane123"), Ok(()));
        assert_eq!(validate_name("Анна-Мария"), Ok(()));
        assert_eq!(validate_name("Dr. Watson"), Ok(()));
    }

    #[test]
    fn name_rejects_second_special_character() {
        assert_eq!(
            validate_name("O'Bri-en"),
            Err(ValidationError::TooManySpecialChars)
        );
        assert_eq!(
            validate_name("J. R.-Smith"),
            Err(ValidationError::TooManySpecialChars)
        );
    }

    #[test]
    fn name_rejects_foreign_characters() {
        assert_eq!(
            validate_name("Jane@Doe"),
            Err(ValidationError::InvalidCharacters)
        );
        assert_eq!(
            validate_name("Jane_Doe"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn name_character_class_is_checked_before_special_count() {
        // Two periods AND an underscore: the class check loses first.
        assert_eq!(
            validate_name("a._.b_"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn required_email_rejects_empty() {
        assert_eq!(validate_email(""), Err(ValidationError::EmptyField));
    }

    #[test]
    fn required_email_accepts_plain_address() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("first.last@mail.example.org"), Ok(()));
    }

    #[test]
    fn required_email_rejects_missing_tld() {
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_email("a@b."), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_email("a@.b"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn required_email_rejects_double_at_and_spaces() {
        assert_eq!(validate_email("a@@b.c"), Err(ValidationError::InvalidFormat));
        assert_eq!(
            validate_email("a b@c.de"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(validate_email("no-at.com"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn optional_email_accepts_empty() {
        assert_eq!(validate_optional_email(""), Ok(()));
        assert_eq!(validate_optional_email("  "), Ok(()));
    }

    #[test]
    fn optional_email_still_checks_shape_when_present() {
        assert_eq!(
            validate_optional_email("bad"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(validate_optional_email("a@b.com"), Ok(()));
    }

    #[test]
    fn phone_accepts_ten_digits() {
        assert_eq!(validate_phone("9991234567"), Ok(()));
        assert_eq!(validate_phone("+7(999) 123-45-67"), Ok(()));
    }

    #[test]
    fn phone_accepts_eleven_digits_with_country_prefix() {
        assert_eq!(validate_phone("79991234567"), Ok(()));
        assert_eq!(validate_phone("89991234567"), Ok(()));
    }

    #[test]
    fn phone_rejects_other_digit_counts() {
        assert_eq!(
            validate_phone("999123456"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_phone("99991234567"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(validate_phone(""), Err(ValidationError::InvalidFormat));
        assert_eq!(
            validate_phone("799912345678"),
            Err(ValidationError::InvalidFormat)
        );
    }
}
