use miaudote_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("abc", Some("A senha deve ter no mínimo 8 caracteres"))]
#[case("abcdefgh", Some("A senha deve conter pelo menos uma letra maiúscula"))]
#[case("ABCDEFGH", Some("A senha deve conter pelo menos uma letra minúscula"))]
#[case("abcdefghH!", Some("A senha deve conter pelo menos um número"))]
#[case("abcdefgH1", Some("A senha deve conter pelo menos um caractere especial"))]
#[case("abcdefgH1!", None)]
fn rules_apply_in_order(#[case] input: &str, #[case] message: Option<&str>) {
    let outcome = validate_password(input, DEFAULT_PASSWORD_MIN_LENGTH);
    assert_eq!(outcome.message(), message);
    assert_eq!(outcome.is_valid(), message.is_none());
}

#[test]
fn minimum_length_is_configurable() {
    assert!(validate_password("aB1!", 4).is_valid());
    assert_eq!(
        validate_password("abcdefgH1!", 12).message(),
        Some("A senha deve ter no mínimo 12 caracteres")
    );
}

#[rstest]
#[case(json!(12_345_678))]
#[case(json!(null))]
#[case(json!(true))]
#[case(json!(["abcdefgH1!"]))]
#[case(json!({"senha": "abcdefgH1!"}))]
fn non_text_passwords_fail_first_rule(#[case] value: serde_json::Value) {
    assert_eq!(
        validate_password_value(&value, 8).message(),
        Some("A senha deve ser um texto")
    );
}

#[test]
fn json_text_password_follows_text_rules() {
    assert!(validate_password_value(&json!("abcdefgH1!"), 8).is_valid());
    assert_eq!(
        validate_password_value(&json!("abc"), 8).message(),
        Some("A senha deve ter no mínimo 8 caracteres")
    );
}

#[test]
fn outcome_serializes_for_the_frontend() {
    let json = serde_json::to_value(validate_password("abc", 8)).unwrap();
    assert_eq!(
        json,
        json!({"valid": false, "message": "A senha deve ter no mínimo 8 caracteres"})
    );
}
