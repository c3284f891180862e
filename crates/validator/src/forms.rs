//! Sign-up payloads for adopters ("adotante") and partners ("parceiro").
//!
//! Form validation checks every field and reports one error per failing
//! field, each tagged with the field name the frontend uses, so the page
//! can render all messages at once.
//!
//! ```
//! use miaudote_validator::{AdotanteSignup, Policy};
//!
//! let form = AdotanteSignup {
//!     nome: "Ana".into(),
//!     email: "ana@miaudote.com.br".into(),
//!     cpf: "529.982.247-25".into(),
//!     telefone: "11987654321".into(),
//!     data_nascimento: "01/01/2000".into(),
//!     senha: "abcdefgH1!".into(),
//!     confirmacao_senha: "abcdefgH1!".into(),
//! };
//! assert!(form.validate(&Policy::default()).is_ok());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::validatable::json_type_name;
use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
use crate::policy::Policy;
use crate::validators::{
    Cnpj, Cpf, Email, Phone, Required, format_cnpj, format_cpf, format_date, format_phone,
};

/// Adopter sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdotanteSignup {
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub telefone: String,
    /// `dd/mm/yyyy`, as typed.
    pub data_nascimento: String,
    pub senha: String,
    pub confirmacao_senha: String,
}

/// Partner sign-up form. `documento` is a CPF for an individual protector or
/// a CNPJ for an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParceiroSignup {
    pub nome: String,
    pub email: String,
    pub documento: String,
    pub telefone: String,
    pub senha: String,
    pub confirmacao_senha: String,
}

/// Either sign-up form, tagged by `"tipo"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum Signup {
    Adotante(AdotanteSignup),
    Parceiro(ParceiroSignup),
}

// ============================================================================
// FIELD REPORT
// ============================================================================

#[derive(Debug, Default)]
struct FieldReport {
    errors: ValidationErrors,
}

impl FieldReport {
    fn check(&mut self, field: &'static str, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            tracing::debug!(field, code = %error.code, "form field rejected");
            self.errors.add(error.with_field(field));
        }
    }

    fn has_field(&self, field: &str) -> bool {
        self.errors.for_field(field).is_some()
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result(())
    }
}

fn confirm_password(senha: &str, confirmacao: &str) -> Result<(), ValidationError> {
    if senha == confirmacao {
        Ok(())
    } else {
        Err(ValidationError::new("password_mismatch", "As senhas não conferem"))
    }
}

fn check_documento(input: &str) -> Result<(), ValidationError> {
    Required.validate(input)?;
    Cpf.or(Cnpj).validate(input).map_err(|error| {
        ValidationError::new("document_invalid", "CPF ou CNPJ inválido").with_nested(error.nested)
    })
}

/// Formats a partner document with the CPF or CNPJ mask, whichever fits.
fn format_documento(input: &str) -> String {
    let formatted = format_cpf(input);
    if formatted == input {
        format_cnpj(input)
    } else {
        formatted
    }
}

// ============================================================================
// FORMS
// ============================================================================

impl AdotanteSignup {
    /// Validates every field against `policy`.
    pub fn validate(&self, policy: &Policy) -> Result<(), ValidationErrors> {
        let mut report = FieldReport::default();
        report.check("nome", Required.validate(&self.nome));
        report.check("email", Required.and(Email).validate(&self.email));
        report.check("cpf", Required.and(Cpf).validate(&self.cpf));
        report.check("telefone", Required.and(Phone).validate(&self.telefone));
        report.check(
            "dataNascimento",
            Required
                .and(policy.birth_date())
                .validate(&self.data_nascimento),
        );
        report.check("senha", policy.password().validate(&self.senha));
        report.check(
            "confirmacaoSenha",
            confirm_password(&self.senha, &self.confirmacao_senha),
        );
        report.finish()
    }

    /// Returns the payload in the shape the backend stores: masked CPF and
    /// phone, ISO birth date. Call after [`validate`](Self::validate).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            cpf: format_cpf(&self.cpf),
            telefone: format_phone(&self.telefone),
            data_nascimento: format_date(&self.data_nascimento),
            senha: self.senha.clone(),
            confirmacao_senha: self.confirmacao_senha.clone(),
        }
    }
}

impl ParceiroSignup {
    /// Validates every field against `policy`.
    pub fn validate(&self, policy: &Policy) -> Result<(), ValidationErrors> {
        let mut report = FieldReport::default();
        report.check("nome", Required.validate(&self.nome));
        report.check("email", Required.and(Email).validate(&self.email));
        report.check("documento", check_documento(&self.documento));
        report.check("telefone", Required.and(Phone).validate(&self.telefone));
        report.check("senha", policy.password().validate(&self.senha));
        report.check(
            "confirmacaoSenha",
            confirm_password(&self.senha, &self.confirmacao_senha),
        );
        report.finish()
    }

    /// Returns the payload with masked document and phone.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            documento: format_documento(&self.documento),
            telefone: format_phone(&self.telefone),
            senha: self.senha.clone(),
            confirmacao_senha: self.confirmacao_senha.clone(),
        }
    }
}

impl Signup {
    /// Validates whichever form this is.
    pub fn validate(&self, policy: &Policy) -> Result<(), ValidationErrors> {
        match self {
            Self::Adotante(form) => form.validate(policy),
            Self::Parceiro(form) => form.validate(policy),
        }
    }
}

// ============================================================================
// JSON BOUNDARY
// ============================================================================

struct JsonFields<'a> {
    object: &'a Map<String, Value>,
    report: FieldReport,
}

impl JsonFields<'_> {
    /// Reads a text field; missing and `null` read as empty.
    fn text(&mut self, field: &'static str) -> String {
        match self.object.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.report.check(
                    field,
                    Err(ValidationError::type_mismatch("string", json_type_name(other))),
                );
                String::new()
            }
        }
    }

    /// Reads the password. Anything but a string, including `null` and a
    /// missing key, fails the password policy's first rule.
    fn password(&mut self, field: &'static str, policy: &Policy) -> String {
        match self.object.get(field) {
            Some(Value::String(s)) => s.clone(),
            value => {
                let value = value.unwrap_or(&Value::Null);
                self.report.check(field, policy.password().validate_value(value));
                String::new()
            }
        }
    }
}

/// Validates a raw sign-up payload for either role.
///
/// Values of the wrong JSON type are reported per field instead of failing
/// the whole document; a non-string `senha` fails the password policy's
/// "must be text" rule.
///
/// ```
/// use miaudote_validator::{Policy, validate_signup_json};
/// use serde_json::json;
///
/// let payload = json!({
///     "tipo": "parceiro",
///     "nome": "Abrigo Patinhas",
///     "email": "contato@patinhas.org",
///     "documento": "11.444.777/0001-61",
///     "telefone": "1133334444",
///     "senha": 12345678,
///     "confirmacaoSenha": "12345678",
/// });
/// let errors = validate_signup_json(&payload, &Policy::default()).unwrap_err();
/// assert_eq!(errors.for_field("senha").unwrap().message, "A senha deve ser um texto");
/// ```
pub fn validate_signup_json(payload: &Value, policy: &Policy) -> Result<Signup, ValidationErrors> {
    let Some(object) = payload.as_object() else {
        let error = ValidationError::type_mismatch("object", json_type_name(payload));
        return Err(std::iter::once(error).collect());
    };

    let mut fields = JsonFields {
        object,
        report: FieldReport::default(),
    };

    let signup = match fields.text("tipo").as_str() {
        "adotante" => Signup::Adotante(AdotanteSignup {
            nome: fields.text("nome"),
            email: fields.text("email"),
            cpf: fields.text("cpf"),
            telefone: fields.text("telefone"),
            data_nascimento: fields.text("dataNascimento"),
            senha: fields.password("senha", policy),
            confirmacao_senha: fields.text("confirmacaoSenha"),
        }),
        "parceiro" => Signup::Parceiro(ParceiroSignup {
            nome: fields.text("nome"),
            email: fields.text("email"),
            documento: fields.text("documento"),
            telefone: fields.text("telefone"),
            senha: fields.password("senha", policy),
            confirmacao_senha: fields.text("confirmacaoSenha"),
        }),
        other => {
            if !fields.report.has_field("tipo") {
                let error = ValidationError::new("signup_kind_invalid", "Tipo de cadastro inválido")
                    .with_param("tipo", other.to_string());
                fields.report.check("tipo", Err(error));
            }
            return Err(fields.report.errors);
        }
    };

    let mut report = fields.report;
    // A rejected senha was read as empty; comparing it would be noise.
    let senha_rejected = report.has_field("senha");
    if let Err(typed) = signup.validate(policy) {
        for error in typed.errors() {
            let field = error.field.as_deref().unwrap_or_default();
            let follows_senha = senha_rejected && field == "confirmacaoSenha";
            if !report.has_field(field) && !follows_senha {
                report.errors.add(error.clone());
            }
        }
    }

    report.errors.into_result(signup)
}
