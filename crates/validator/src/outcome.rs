//! The `{ valid, message }` record returned to form components.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Result of a field check, ready to render next to the input.
///
/// `valid == true` always comes with `message == None`.
///
/// # Examples
///
/// ```
/// use miaudote_validator::Outcome;
///
/// let ok = Outcome::valid();
/// assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"valid":true,"message":null}"#);
///
/// let err = Outcome::invalid("Formato de data inválido");
/// assert!(!err.is_valid());
/// assert_eq!(err.message(), Some("Formato de data inválido"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    valid: bool,
    message: Option<String>,
}

impl Outcome {
    /// A passing outcome with no message.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome carrying the user-facing reason.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Whether the checked value was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The reason the value was rejected, if it was.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<Result<(), ValidationError>> for Outcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(error) => Self::invalid(error.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_ok_result_is_valid_without_message() {
        let outcome = Outcome::from(Ok(()));
        assert_eq!(outcome, Outcome::valid());
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn from_err_result_keeps_message() {
        let outcome = Outcome::from(Err(ValidationError::new("cpf_invalid", "CPF inválido")));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message(), Some("CPF inválido"));
    }

    #[test]
    fn serializes_invalid_with_message() {
        let json = serde_json::to_value(Outcome::invalid("Data de nascimento inválida")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": false, "message": "Data de nascimento inválida"})
        );
    }
}
