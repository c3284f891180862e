//! Brazilian taxpayer documents: CPF and CNPJ.
//!
//! Both use weighted-sum modulo-11 check digits. Input may carry the usual
//! punctuation (`529.982.247-25`, `11.444.777/0001-61`); every non-digit is
//! stripped before the checks run.

use crate::foundation::ValidationError;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

fn digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// CPF check digit over `digits`, weights running from `digits.len() + 1`
/// down to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| d * w)
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        rest => rest,
    }
}

/// CNPJ check digit: weights start at `first_weight`, descend to 2, then
/// wrap to 9.
fn cnpj_check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let mut weight = first_weight;
    let mut sum = 0;
    for d in digits {
        sum += d * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }
    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

/// Returns true when `input` holds a valid CPF.
///
/// # Examples
///
/// ```
/// use miaudote_validator::validators::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(!is_valid_cpf("529.982.247-26"));
/// assert!(!is_valid_cpf("111.111.111-11"));
/// ```
#[must_use]
pub fn is_valid_cpf(input: &str) -> bool {
    let digits = digits(input);
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Returns true when `input` holds a valid CNPJ.
///
/// # Examples
///
/// ```
/// use miaudote_validator::validators::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11.444.777/0001-61"));
/// assert!(!is_valid_cnpj("11.444.777/0001-62"));
/// assert!(!is_valid_cnpj("1144477700016"));
/// ```
#[must_use]
pub fn is_valid_cnpj(input: &str) -> bool {
    let digits = digits(input);
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12], 5) == digits[12]
        && cnpj_check_digit(&digits[..13], 6) == digits[13]
}

/// Formats an 11-digit CPF as `000.000.000-00`.
///
/// Any other digit count returns the input unchanged.
#[must_use]
pub fn format_cpf(input: &str) -> String {
    let d: String = input.chars().filter(char::is_ascii_digit).collect();
    if d.len() != CPF_LEN {
        return input.to_string();
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Formats a 14-digit CNPJ as `00.000.000/0000-00`.
///
/// Any other digit count returns the input unchanged.
#[must_use]
pub fn format_cnpj(input: &str) -> String {
    let d: String = input.chars().filter(char::is_ascii_digit).collect();
    if d.len() != CNPJ_LEN {
        return input.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

crate::validator! {
    /// Validates a CPF (pessoa física).
    pub Cpf for str;
    rule(input) { is_valid_cpf(input) }
    error(input) { ValidationError::new("cpf_invalid", "CPF inválido") }
    fn cpf();
}

crate::validator! {
    /// Validates a CNPJ (pessoa jurídica).
    pub Cnpj for str;
    rule(input) { is_valid_cnpj(input) }
    error(input) { ValidationError::new("cnpj_invalid", "CNPJ inválido") }
    fn cnpj();
}
