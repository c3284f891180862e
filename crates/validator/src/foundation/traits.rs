//! Core traits for the validation system
//!
//! Every validator in the crate implements [`Validate`]; [`ValidateExt`]
//! adds the combinator methods on top.

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over their input type. All of them return
/// `Result<(), ValidationError>` so they compose uniformly.
///
/// # Examples
///
/// ```
/// use miaudote_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("has_spaces", "Não use espaços"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("miau").is_ok());
/// assert!(NoSpaces.validate("mi au").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` allows validating `str` directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single validator accepts `&str`, `String` and `serde_json::Value`
    /// without explicit conversion by the caller. A JSON value of the wrong
    /// type yields a `type_mismatch` error instead of a panic.
    ///
    /// ```
    /// use miaudote_validator::foundation::Validate;
    /// use miaudote_validator::validators::Cpf;
    /// use serde_json::json;
    ///
    /// assert!(Cpf.validate_any(&String::from("529.982.247-25")).is_ok());
    /// assert!(Cpf.validate_any(&json!("52998224725")).is_ok());
    /// assert_eq!(Cpf.validate_any(&json!(52998224725_u64)).unwrap_err().code, "type_mismatch");
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented automatically for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use miaudote_validator::prelude::*;
///
/// let documento = Cpf.or(Cnpj);
/// assert!(documento.validate("529.982.247-25").is_ok());
/// assert!(documento.validate("11.444.777/0001-61").is_ok());
/// assert!(documento.validate("123").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
