//! Minimum-age check on a `dd/mm/yyyy` birth date.
//!
//! The cutoff is today's UTC calendar date with the year reduced by the
//! minimum age. Comparisons use calendar dates only, so the result does not
//! depend on the time zone or the time of day.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::outcome::Outcome;

/// Minimum age used when none is configured.
pub const DEFAULT_MINIMUM_AGE: u32 = 16;

/// Years below this cannot be expressed by the form's date picker and are
/// rejected as invalid dates.
const MIN_YEAR: i32 = 100;

static DATE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("birth date regex")
});

fn format_error() -> ValidationError {
    ValidationError::new("date_format_invalid", "Formato de data inválido")
        .with_param("expected", "dd/mm/yyyy")
}

fn invalid_date() -> ValidationError {
    ValidationError::new("date_invalid", "Data de nascimento inválida")
}

/// Latest birth date that satisfies `minimum_age` on `today`.
///
/// 29 February rolls over to 1 March when the cutoff year is not a leap
/// year.
fn cutoff_date(today: NaiveDate, minimum_age: u32) -> NaiveDate {
    i32::try_from(minimum_age)
        .ok()
        .and_then(|age| today.year().checked_sub(age))
        .and_then(|year| {
            NaiveDate::from_ymd_opt(year, today.month(), today.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        })
        .unwrap_or(NaiveDate::MIN)
}

/// Validates a `dd/mm/yyyy` birth date against a minimum age.
///
/// By default the check runs against the current UTC date; [`BirthDate::on`]
/// pins the reference date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use miaudote_validator::foundation::Validate;
/// use miaudote_validator::validators::BirthDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let check = BirthDate::new(16).on(today);
///
/// assert!(check.validate("19/10/2010").is_ok());
/// assert_eq!(check.validate("20/10/2010").unwrap_err().code, "underage");
/// assert_eq!(check.validate("31/02/2020").unwrap_err().code, "date_invalid");
/// assert_eq!(check.validate("2020/02/01").unwrap_err().code, "date_format_invalid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    minimum_age: u32,
    today: Option<NaiveDate>,
}

impl BirthDate {
    /// Requires the person to be at least `minimum_age` years old.
    #[must_use]
    pub const fn new(minimum_age: u32) -> Self {
        Self {
            minimum_age,
            today: None,
        }
    }

    /// Checks against `today` instead of the current UTC date.
    #[must_use = "builder methods must be chained or built"]
    pub const fn on(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The configured minimum age.
    #[must_use]
    pub const fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    /// Parses `dd/mm/yyyy` into a calendar date.
    pub fn parse(input: &str) -> Result<NaiveDate, ValidationError> {
        let caps = DATE_FORMAT.captures(input).ok_or_else(format_error)?;
        let field = |i: usize| caps[i].parse::<u32>().map_err(|_| format_error());

        let day = field(1)?;
        let month = field(2)?;
        let year = i32::try_from(field(3)?).map_err(|_| format_error())?;
        if year < MIN_YEAR {
            return Err(invalid_date());
        }

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid_date)
    }
}

impl Default for BirthDate {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_AGE)
    }
}

impl Validate for BirthDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let birth = Self::parse(input)?;
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        let cutoff = cutoff_date(today, self.minimum_age);

        if birth > cutoff {
            return Err(ValidationError::new(
                "underage",
                format!("Você deve ter pelo menos {} anos", self.minimum_age),
            )
            .with_param("minimum_age", self.minimum_age.to_string())
            .with_param("cutoff", cutoff.to_string()));
        }

        Ok(())
    }
}

/// Checks a `dd/mm/yyyy` birth date against `minimum_age` using today's
/// UTC date.
///
/// ```
/// use miaudote_validator::validators::validate_age;
///
/// assert!(validate_age("01/01/2000", 16).is_valid());
/// assert_eq!(validate_age("31/02/2020", 16).message(), Some("Data de nascimento inválida"));
/// ```
#[must_use]
pub fn validate_age(birth_date: &str, minimum_age: u32) -> Outcome {
    BirthDate::new(minimum_age).validate(birth_date).into()
}

/// Same as [`validate_age`] with an explicit reference date.
#[must_use]
pub fn validate_age_on(birth_date: &str, minimum_age: u32, today: NaiveDate) -> Outcome {
    BirthDate::new(minimum_age).on(today).validate(birth_date).into()
}
