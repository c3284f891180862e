//! Brazilian phone numbers: display mask, as-you-type mask and validator.
//!
//! A number is the two-digit area code (DDD) followed by an 8-digit
//! landline or a 9-digit mobile number.

use crate::foundation::ValidationError;

const LANDLINE_DIGITS: usize = 10;
const MOBILE_DIGITS: usize = 11;

fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a phone number for display.
///
/// 11 digits become `(DD) DDDDD-DDDD`, 10 digits become `(DD) DDDD-DDDD`.
/// Any other digit count returns the input unchanged.
///
/// # Examples
///
/// ```
/// use miaudote_validator::validators::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
/// assert_eq!(format_phone("123"), "123");
/// ```
#[must_use]
pub fn format_phone(input: &str) -> String {
    let d = extract_digits(input);
    match d.len() {
        MOBILE_DIGITS => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        LANDLINE_DIGITS => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => input.to_string(),
    }
}

/// Masks a phone number while it is being typed.
///
/// Digits past the eleventh are dropped. The landline layout is used until
/// the eleventh digit arrives.
///
/// ```
/// use miaudote_validator::validators::mask_phone_input;
///
/// assert_eq!(mask_phone_input("1"), "(1");
/// assert_eq!(mask_phone_input("11987"), "(11) 987");
/// assert_eq!(mask_phone_input("1198765432"), "(11) 9876-5432");
/// assert_eq!(mask_phone_input("119876543210"), "(11) 98765-4321");
/// ```
#[must_use]
pub fn mask_phone_input(input: &str) -> String {
    let mut d = extract_digits(input);
    d.truncate(MOBILE_DIGITS);
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

crate::validator! {
    /// Validates that a phone number has 10 (landline) or 11 (mobile) digits
    /// once formatting is stripped.
    pub Phone for str;
    rule(input) {
        matches!(extract_digits(input).len(), LANDLINE_DIGITS | MOBILE_DIGITS)
    }
    error(input) {
        ValidationError::new("phone_invalid", "Telefone inválido")
            .with_param("digits", extract_digits(input).len().to_string())
    }
    fn phone();
}
