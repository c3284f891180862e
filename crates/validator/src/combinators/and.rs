//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed. The
//! error from the first failing validator is returned unchanged, so
//! `Required.and(Cpf)` reports `required` for a blank field and
//! `cpf_invalid` for a malformed one.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// # Examples
///
/// ```
/// use miaudote_validator::combinators::And;
/// use miaudote_validator::foundation::Validate;
/// use miaudote_validator::validators::{Phone, Required};
///
/// let telefone = And::new(Required, Phone);
/// assert!(telefone.validate("(11) 98765-4321").is_ok());
/// assert_eq!(telefone.validate("").unwrap_err().code, "required");
/// assert_eq!(telefone.validate("1234").unwrap_err().code, "phone_invalid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
