use miaudote_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn adotante_payload() -> Value {
    json!({
        "tipo": "adotante",
        "nome": "Ana Souza",
        "email": "ana@miaudote.com.br",
        "cpf": "529.982.247-25",
        "telefone": "(11) 98765-4321",
        "dataNascimento": "01/01/2000",
        "senha": "abcdefgH1!",
        "confirmacaoSenha": "abcdefgH1!",
    })
}

fn fields(errors: &ValidationErrors) -> Vec<&str> {
    errors
        .errors()
        .iter()
        .filter_map(|e| e.field.as_deref())
        .collect()
}

#[test]
fn valid_adotante_payload() {
    crate::init_logging();
    let signup = validate_signup_json(&adotante_payload(), &Policy::default()).unwrap();
    let Signup::Adotante(form) = signup else {
        panic!("expected an adotante signup");
    };
    assert_eq!(form.nome, "Ana Souza");
    assert_eq!(form.normalized().data_nascimento, "2000-01-01");
}

#[test]
fn missing_fields_are_reported() {
    crate::init_logging();
    let errors =
        validate_signup_json(&json!({"tipo": "adotante"}), &Policy::default()).unwrap_err();
    assert_eq!(
        fields(&errors),
        vec!["senha", "nome", "email", "cpf", "telefone", "dataNascimento"]
    );
    assert_eq!(errors.for_field("email").unwrap().message, "Campo obrigatório");
    assert_eq!(errors.for_field("senha").unwrap().message, "A senha deve ser um texto");
}

#[test]
fn numeric_password_is_not_text() {
    let mut payload = adotante_payload();
    payload["senha"] = json!(12_345_678);
    let errors = validate_signup_json(&payload, &Policy::default()).unwrap_err();
    let senha = errors.for_field("senha").unwrap();
    assert_eq!(senha.message, "A senha deve ser um texto");
    assert_eq!(senha.param("actual"), Some("number"));
}

#[test]
fn mismatched_confirmation() {
    let mut payload = adotante_payload();
    payload["confirmacaoSenha"] = json!("abcdefgH1?");
    let errors = validate_signup_json(&payload, &Policy::default()).unwrap_err();
    assert_eq!(fields(&errors), vec!["confirmacaoSenha"]);
    assert_eq!(errors.errors()[0].message, "As senhas não conferem");
}

#[test]
fn stricter_policy_from_vars() {
    let policy = Policy::from_vars(|var| {
        (var == miaudote_validator::policy::PASSWORD_MIN_LENGTH_VAR).then(|| "16".to_string())
    })
    .unwrap();
    let errors = validate_signup_json(&adotante_payload(), &policy).unwrap_err();
    assert_eq!(
        errors.for_field("senha").unwrap().message,
        "A senha deve ter no mínimo 16 caracteres"
    );
}

#[test]
fn parceiro_with_cnpj() {
    let payload = json!({
        "tipo": "parceiro",
        "nome": "Abrigo Patinhas",
        "email": "contato@patinhas.org",
        "documento": "45.723.174/0001-10",
        "telefone": "1133334444",
        "senha": "Patinhas#2024",
        "confirmacaoSenha": "Patinhas#2024",
    });
    let signup = validate_signup_json(&payload, &Policy::default()).unwrap();
    assert!(matches!(signup, Signup::Parceiro(_)));
    assert!(signup.validate(&Policy::default()).is_ok());
}

#[test]
fn errors_display_every_field() {
    let errors = AdotanteSignup::default()
        .validate(&Policy::default())
        .unwrap_err();
    let rendered = errors.to_string();
    assert!(rendered.contains("cpf"));
    assert!(rendered.contains("Campo obrigatório"));
}
