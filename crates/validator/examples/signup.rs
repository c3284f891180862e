//! Validates a sign-up payload read from stdin (or a built-in sample).
//!
//! ```text
//! MIAUDOTE_LOG=debug cargo run -p miaudote-validator --example signup < payload.json
//! ```

use std::io::{IsTerminal, Read};

use miaudote_validator::{Policy, Signup, validate_signup_json};

const SAMPLE: &str = r#"{
    "tipo": "adotante",
    "nome": "Ana Souza",
    "email": "ana@miaudote",
    "cpf": "529.982.247-25",
    "telefone": "11987654321",
    "dataNascimento": "31/02/2000",
    "senha": 12345678,
    "confirmacaoSenha": "12345678"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    miaudote_log::auto_init()?;
    let policy = Policy::from_env()?;

    let mut input = String::new();
    if std::io::stdin().is_terminal() {
        input.push_str(SAMPLE);
    } else {
        std::io::stdin().read_to_string(&mut input)?;
    }
    let payload: serde_json::Value = serde_json::from_str(&input)?;

    match validate_signup_json(&payload, &policy) {
        Ok(Signup::Adotante(form)) => {
            println!("✓ adotante ok: {}", serde_json::to_string(&form.normalized())?);
        }
        Ok(Signup::Parceiro(form)) => {
            println!("✓ parceiro ok: {}", serde_json::to_string(&form.normalized())?);
        }
        Err(errors) => {
            for error in errors.errors() {
                println!("✗ {}: {}", error.field.as_deref().unwrap_or("-"), error.message);
            }
        }
    }
    Ok(())
}
