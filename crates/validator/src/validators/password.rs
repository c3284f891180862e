//! Password policy validator.
//!
//! Rules are checked in a fixed order and only the first violation is
//! reported:
//!
//! 1. the value is text (only observable across the JSON boundary)
//! 2. at least `min_length` characters
//! 3. an uppercase letter
//! 4. a lowercase letter
//! 5. a digit
//! 6. a character outside `[A-Za-z0-9]`

use crate::foundation::{Validate, ValidationError};
use crate::outcome::Outcome;

/// Minimum password length used when none is configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Validates a password against the composition policy.
///
/// Length is counted in `char`s, so a character outside the Basic
/// Multilingual Plane (an emoji, say) counts once, where a JavaScript
/// `.length` would count two.
///
/// # Examples
///
/// ```
/// use miaudote_validator::validators::Password;
/// use miaudote_validator::foundation::Validate;
///
/// let policy = Password::default();
/// assert!(policy.validate("abcdefgH1!").is_ok());
/// assert_eq!(policy.validate("abc").unwrap_err().code, "password_too_short");
/// assert_eq!(policy.validate("abcdefghH!").unwrap_err().code, "password_missing_digit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password {
    min_length: usize,
}

impl Password {
    /// Creates a policy requiring at least `min_length` characters.
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// The configured minimum length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Validates a value that crossed a JSON boundary.
    ///
    /// A non-string value fails the first rule instead of reporting a
    /// generic type mismatch.
    ///
    /// ```
    /// use miaudote_validator::validators::Password;
    /// use serde_json::json;
    ///
    /// let err = Password::default().validate_value(&json!(12345678)).unwrap_err();
    /// assert_eq!(err.code, "password_not_text");
    /// assert_eq!(err.param("actual"), Some("number"));
    /// ```
    pub fn validate_value(&self, value: &serde_json::Value) -> Result<(), ValidationError> {
        self.validate_any(value).map_err(|error| {
            if error.code == "type_mismatch" {
                let actual = error.param("actual").unwrap_or("unknown").to_string();
                ValidationError::new("password_not_text", "A senha deve ser um texto")
                    .with_param("actual", actual)
            } else {
                error
            }
        })
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_MIN_LENGTH)
    }
}

fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let length = input.chars().count();
        if length < self.min_length {
            return Err(ValidationError::new(
                "password_too_short",
                format!("A senha deve ter no mínimo {} caracteres", self.min_length),
            )
            .with_param("min_length", self.min_length.to_string())
            .with_param("actual", length.to_string()));
        }

        if !input.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::new(
                "password_missing_uppercase",
                "A senha deve conter pelo menos uma letra maiúscula",
            ));
        }

        if !input.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::new(
                "password_missing_lowercase",
                "A senha deve conter pelo menos uma letra minúscula",
            ));
        }

        if !input.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "password_missing_digit",
                "A senha deve conter pelo menos um número",
            ));
        }

        if !input.chars().any(is_special) {
            return Err(ValidationError::new(
                "password_missing_special",
                "A senha deve conter pelo menos um caractere especial",
            ));
        }

        Ok(())
    }
}

/// Checks `password` against the policy with the given minimum length.
///
/// ```
/// use miaudote_validator::validators::validate_password;
///
/// assert!(validate_password("abcdefgH1!", 8).is_valid());
/// assert_eq!(
///     validate_password("abc", 8).message(),
///     Some("A senha deve ter no mínimo 8 caracteres"),
/// );
/// ```
#[must_use]
pub fn validate_password(password: &str, min_length: usize) -> Outcome {
    Password::new(min_length).validate(password).into()
}

/// Like [`validate_password`], for a value that crossed a JSON boundary.
#[must_use]
pub fn validate_password_value(password: &serde_json::Value, min_length: usize) -> Outcome {
    Password::new(min_length).validate_value(password).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("abc", "password_too_short")]
    #[case("", "password_too_short")]
    #[case("abcdefgh", "password_missing_uppercase")]
    #[case("ABCDEFGH", "password_missing_lowercase")]
    #[case("abcdefghH!", "password_missing_digit")]
    #[case("abcdefgH1", "password_missing_special")]
    #[case("abcdefgH1 ", "ok")]
    #[case("abcdefgH1!", "ok")]
    #[case("Senha_Forte_2024", "ok")]
    fn rule_order(#[case] input: &str, #[case] expected: &str) {
        let code = Password::default()
            .validate(input)
            .err()
            .map_or_else(|| "ok".to_string(), |e| e.code.into_owned());
        assert_eq!(code, expected);
    }

    #[test]
    fn length_failure_wins_over_every_other_rule() {
        // lowercase only, no digit, no special: still reports length first
        let err = Password::new(12).validate("abc").unwrap_err();
        assert_eq!(err.code, "password_too_short");
        assert_eq!(err.param("min_length"), Some("12"));
        assert_eq!(err.param("actual"), Some("3"));
    }

    #[test]
    fn custom_minimum_length() {
        assert!(Password::new(4).validate("aB1!").is_ok());
        assert!(Password::new(5).validate("aB1!").is_err());
        assert_eq!(
            validate_password("aB1!", 10).message(),
            Some("A senha deve ter no mínimo 10 caracteres")
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 8 chars, 9 bytes
        assert!(Password::new(8).validate("ãbcdeF1!").is_ok());
        assert!(Password::new(9).validate("ãbcdeF1!").is_err());
    }

    #[test]
    fn non_ascii_letters_count_as_special() {
        assert!(Password::default().validate("abcdeFG1é").is_ok());
    }

    #[test]
    fn valid_outcome_has_no_message() {
        let outcome = validate_password("abcdefgH1!", DEFAULT_PASSWORD_MIN_LENGTH);
        assert!(outcome.is_valid());
        assert_eq!(outcome.message(), None);
    }

    #[rstest]
    #[case(json!(12345678), "number")]
    #[case(json!(null), "null")]
    #[case(json!(true), "boolean")]
    #[case(json!(["abcdefgH1!"]), "array")]
    fn json_non_string_fails_first_rule(#[case] value: serde_json::Value, #[case] actual: &str) {
        let err = Password::default().validate_value(&value).unwrap_err();
        assert_eq!(err.code, "password_not_text");
        assert_eq!(err.param("actual"), Some(actual));
        assert_eq!(
            validate_password_value(&value, 8).message(),
            Some("A senha deve ser um texto")
        );
    }

    #[test]
    fn json_string_runs_full_policy() {
        assert!(validate_password_value(&json!("abcdefgH1!"), 8).is_valid());
        assert_eq!(
            Password::default()
                .validate_value(&json!("abcdefghH!"))
                .unwrap_err()
                .code,
            "password_missing_digit"
        );
    }

    #[test]
    fn length_counts_chars_not_utf16_units() {
        // Four emoji are eight UTF-16 units but only four chars.
        assert_eq!(
            validate_password("aB1\u{1F600}\u{1F600}\u{1F600}\u{1F600}", 8).message(),
            Some("A senha deve ter no mínimo 8 caracteres")
        );
        assert!(validate_password("aB1!\u{1F600}\u{1F600}\u{1F600}\u{1F600}", 8).is_valid());
    }
}
