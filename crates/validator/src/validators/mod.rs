//! Built-in validators and formatters
//!
//! # Categories
//!
//! - **Documents**: CPF and CNPJ check digits and display masks
//! - **Password**: composition policy
//! - **Phone**: display mask, as-you-type mask, digit-count validator
//! - **Dates**: `dd/mm/yyyy` to ISO conversion, as-you-type mask
//! - **Age**: minimum age from a birth date
//! - **Content**: required fields, e-mail shape
//!
//! # Examples
//!
//! ```
//! use miaudote_validator::prelude::*;
//!
//! let cpf = Required.and(Cpf);
//! assert!(cpf.validate("529.982.247-25").is_ok());
//!
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! assert_eq!(format_date("25/12/2024"), "2024-12-25");
//! ```

pub mod age;
pub mod content;
pub mod date;
pub mod document;
pub mod password;
pub mod phone;

pub use age::{BirthDate, DEFAULT_MINIMUM_AGE, validate_age, validate_age_on};
pub use content::{Email, Required, email, required};
pub use date::{format_date, mask_date_input};
pub use document::{Cnpj, Cpf, cnpj, cpf, format_cnpj, format_cpf, is_valid_cnpj, is_valid_cpf};
pub use password::{
    DEFAULT_PASSWORD_MIN_LENGTH, Password, validate_password, validate_password_value,
};
pub use phone::{Phone, format_phone, mask_phone_input, phone};
