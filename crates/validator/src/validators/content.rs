//! Text content validators: required fields and e-mail addresses.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex")
});

crate::validator! {
    /// Validates that a field is not blank (whitespace-only counts as blank).
    pub Required for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("required", "Campo obrigatório") }
    fn required();
}

crate::validator! {
    /// Validates the basic `local@domain.tld` e-mail shape.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("email_invalid", "E-mail inválido") }
    fn email();
}
