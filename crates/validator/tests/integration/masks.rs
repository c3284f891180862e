use miaudote_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case("11987654321", "(11) 98765-4321")]
#[case("1133334444", "(11) 3333-4444")]
#[case("(11) 98765-4321", "(11) 98765-4321")]
#[case("11 3333 4444", "(11) 3333-4444")]
#[case("123", "123")]
#[case("", "")]
#[case("119876543210", "119876543210")]
fn format_phone_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_phone(input), expected);
}

#[rstest]
#[case("", "")]
#[case("1", "(1")]
#[case("11", "(11")]
#[case("119", "(11) 9")]
#[case("113333", "(11) 3333")]
#[case("1133334", "(11) 3333-4")]
#[case("1133334444", "(11) 3333-4444")]
#[case("11987654321", "(11) 98765-4321")]
#[case("11987654321999", "(11) 98765-4321")]
fn mask_phone_as_typed(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(mask_phone_input(input), expected);
}

#[test]
fn phone_validator_counts_digits() {
    assert!(Phone.validate("(11) 98765-4321").is_ok());
    assert!(Phone.validate("1133334444").is_ok());
    let err = Phone.validate("123").unwrap_err();
    assert_eq!(err.message, "Telefone inválido");
    assert_eq!(err.param("digits"), Some("3"));
}

#[rstest]
#[case("25/12/2024", "2024-12-25")]
#[case("01/01/2000", "2000-01-01")]
#[case("25/12", "-12-25")]
#[case("abc", "--abc")]
fn format_date_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_date(input), expected);
}

#[rstest]
#[case("2", "2")]
#[case("251", "25/1")]
#[case("25/12/2024", "25/12/2024")]
#[case("251220241", "25/12/2024")]
fn mask_date_as_typed(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(mask_date_input(input), expected);
}
