//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type and compose with
//! `.and()` / `.or()`:
//!
//! ```
//! use miaudote_validator::foundation::{Validate, ValidateExt};
//! use miaudote_validator::validators::{Cpf, Required};
//!
//! let cpf = Required.and(Cpf);
//! assert!(cpf.validate("529.982.247-25").is_ok());
//! assert_eq!(cpf.validate("   ").unwrap_err().code, "required");
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;

/// Validates a value with every validator, collecting all failures.
///
/// # Examples
///
/// ```
/// use miaudote_validator::foundation::{Validate, validate_with_all};
/// use miaudote_validator::validators::{Cnpj, Cpf};
///
/// let validators: &[&dyn Validate<Input = str>] = &[&Cpf, &Cnpj];
/// let errors = validate_with_all("52998224725", validators).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    errors.into_result(())
}
