//! `dd/mm/yyyy` date helpers for form fields.
//!
//! These are structural transforms only. Calendar validity is checked by
//! [`BirthDate`](super::BirthDate).

const DATE_DIGITS: usize = 8;

/// Converts `dd/mm/yyyy` into the ISO `yyyy-mm-dd` the backend expects.
///
/// Missing components are emitted as empty strings and extra components
/// are ignored; the function never fails.
///
/// # Examples
///
/// ```
/// use miaudote_validator::validators::format_date;
///
/// assert_eq!(format_date("25/12/2024"), "2024-12-25");
/// assert_eq!(format_date("25/12"), "-12-25");
/// ```
#[must_use]
pub fn format_date(input: &str) -> String {
    let mut parts = input.split('/');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();
    format!("{year}-{month}-{day}")
}

/// Masks a date while it is being typed, producing `dd`, `dd/mm` or
/// `dd/mm/yyyy`. Digits past the eighth are dropped.
///
/// ```
/// use miaudote_validator::validators::mask_date_input;
///
/// assert_eq!(mask_date_input("2512"), "25/12");
/// assert_eq!(mask_date_input("25122024"), "25/12/2024");
/// ```
#[must_use]
pub fn mask_date_input(input: &str) -> String {
    let mut d: String = input.chars().filter(char::is_ascii_digit).collect();
    d.truncate(DATE_DIGITS);
    match d.len() {
        0..=2 => d,
        3..=4 => format!("{}/{}", &d[..2], &d[2..]),
        _ => format!("{}/{}/{}", &d[..2], &d[2..4], &d[4..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("25/12/2024", "2024-12-25")]
    #[case("01/01/2000", "2000-01-01")]
    #[case("31/02/2020", "2020-02-31")]
    #[case("", "--")]
    #[case("2024", "--2024")]
    #[case("1/2/3/4", "3-2-1")]
    fn reorders_components(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("2", "2")]
    #[case("25", "25")]
    #[case("251", "25/1")]
    #[case("25/12", "25/12")]
    #[case("251220", "25/12/20")]
    #[case("25/12/2024", "25/12/2024")]
    #[case("2512202499", "25/12/2024")]
    fn masks_partial_input(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_date_input(input), expected);
    }
}
