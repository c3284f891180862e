//! # miaudote-validator
//!
//! Field validation and input masking for the MiAudote adoption platform.
//!
//! ## Quick Start
//!
//! ```rust
//! use miaudote_validator::prelude::*;
//!
//! // Compose validators with .and() / .or()
//! let documento = Required.and(Cpf.or(Cnpj));
//! assert!(documento.validate("11.444.777/0001-61").is_ok());
//!
//! // Frontend-style helpers return an Outcome
//! let outcome = validate_password("curta", 8);
//! assert_eq!(outcome.message(), Some("A senha deve ter no mínimo 8 caracteres"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for unit validators, or implement
//! [`Validate`](foundation::Validate) manually when the validator carries
//! configuration.
//!
//! ## Built-in Validators
//!
//! - **Documents**: [`Cpf`](validators::Cpf), [`Cnpj`](validators::Cnpj),
//!   [`format_cpf`], [`format_cnpj`]
//! - **Password**: [`Password`](validators::Password), [`validate_password`]
//! - **Phone**: [`Phone`](validators::Phone), [`format_phone`], [`mask_phone_input`]
//! - **Dates**: [`BirthDate`](validators::BirthDate), [`validate_age`],
//!   [`format_date`], [`mask_date_input`]
//! - **Content**: [`Required`](validators::Required), [`Email`](validators::Email)
//!
//! ## Forms
//!
//! [`AdotanteSignup`] and [`ParceiroSignup`] check every field against a
//! [`Policy`] and report one error per field.

// ValidationError is the error type of every validator; boxing it would add
// an allocation to each rejected field.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod forms;
pub mod foundation;
mod macros;
pub mod outcome;
pub mod policy;
pub mod prelude;
pub mod validators;

pub use forms::{AdotanteSignup, ParceiroSignup, Signup, validate_signup_json};
pub use outcome::Outcome;
pub use policy::{Policy, PolicyError};
pub use validators::{
    format_cnpj, format_cpf, format_date, format_phone, is_valid_cnpj, is_valid_cpf,
    mask_date_input, mask_phone_input, validate_age, validate_age_on, validate_password,
    validate_password_value,
};
