use miaudote_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case("00000000000")]
#[case("11111111111")]
#[case("99999999999")]
#[case("000.000.000-00")]
fn repeated_digit_cpf_is_invalid(#[case] input: &str) {
    assert!(!is_valid_cpf(input));
}

#[rstest]
#[case("52998224725", true)]
#[case("529.982.247-25", true)]
#[case("111.444.777-35", true)]
#[case("52998224726", false)]
#[case("5299822472", false)]
#[case("529982247250", false)]
#[case("", false)]
fn cpf_check_digits(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_cpf(input), expected);
}

#[test]
fn every_single_digit_cnpj_mutation_is_rejected() {
    let valid = "11444777000161";
    assert!(is_valid_cnpj(valid));

    for (i, original) in valid.char_indices() {
        for replacement in '0'..='9' {
            if replacement == original {
                continue;
            }
            let mut mutated = valid.to_string();
            mutated.replace_range(i..=i, &replacement.to_string());
            assert!(!is_valid_cnpj(&mutated), "{mutated} should be invalid");
        }
    }
}

#[rstest]
#[case("1144477700016")]
#[case("114447770001611")]
#[case("00000000000000")]
fn malformed_cnpj_is_invalid(#[case] input: &str) {
    assert!(!is_valid_cnpj(input));
}

#[test]
fn document_validators_compose() {
    let documento = Required.and(Cpf.or(Cnpj));
    assert!(documento.validate("45.723.174/0001-10").is_ok());
    assert!(documento.validate("111.444.777-35").is_ok());

    let err = documento.validate("12345").unwrap_err();
    assert_eq!(err.code, "or_failed");
    assert_eq!(err.nested.len(), 2);
    assert_eq!(err.nested[0].message, "CPF inválido");
    assert_eq!(err.nested[1].message, "CNPJ inválido");
}

#[test]
fn document_validators_accept_json_strings() {
    let value = serde_json::json!("529.982.247-25");
    assert!(Cpf.validate_any(&value).is_ok());

    let err = Cpf.validate_any(&serde_json::json!(52_998_224_725_u64)).unwrap_err();
    assert_eq!(err.code, "type_mismatch");
}

#[test]
fn masks_keep_documents_valid() {
    assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    assert_eq!(format_cnpj("11444777000161"), "11.444.777/0001-61");
    assert!(is_valid_cpf(&format_cpf("52998224725")));
    assert!(is_valid_cnpj(&format_cnpj("11444777000161")));
}
