use chrono::NaiveDate;
use miaudote_validator::prelude::*;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case(date(2025, 12, 31))]
#[case(date(2025, 1, 2))]
#[case(date(2020, 6, 15))]
fn sixteen_year_rule_before_2026(#[case] today: NaiveDate) {
    assert_eq!(
        validate_age_on("01/01/2010", 16, today).message(),
        Some("Você deve ter pelo menos 16 anos")
    );
}

#[test]
fn sixteen_year_rule_from_2026() {
    assert!(validate_age_on("01/01/2010", 16, date(2026, 1, 1)).is_valid());
}

#[test]
fn adult_birth_dates_are_valid() {
    assert!(validate_age("01/01/2000", DEFAULT_MINIMUM_AGE).is_valid());
    assert!(validate_age_on("01/01/2000", 16, date(2026, 10, 19)).is_valid());
}

#[rstest]
#[case("31/02/2020", "Data de nascimento inválida")]
#[case("2020/02/01", "Formato de data inválido")]
#[case("", "Formato de data inválido")]
fn invalid_birth_dates(#[case] input: &str, #[case] message: &str) {
    assert_eq!(validate_age(input, 16).message(), Some(message));
}

#[test]
fn policy_drives_birth_date_validator() {
    let policy = Policy {
        minimum_age: 18,
        ..Policy::default()
    };
    let check = policy.birth_date().on(date(2026, 10, 19));
    assert!(check.validate("19/10/2008").is_ok());
    assert_eq!(check.validate("20/10/2008").unwrap_err().code, "underage");
}
