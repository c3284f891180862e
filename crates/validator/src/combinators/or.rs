//! OR combinator - logical disjunction of validators
//!
//! At least one validator must pass. If the first passes the second is not
//! evaluated; if both fail, the combined error nests both failures.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// # Examples
///
/// ```
/// use miaudote_validator::combinators::Or;
/// use miaudote_validator::foundation::Validate;
/// use miaudote_validator::validators::{Cnpj, Cpf};
///
/// let documento = Or::new(Cpf, Cnpj);
/// assert!(documento.validate("529.982.247-25").is_ok());
/// assert!(documento.validate("11.444.777/0001-61").is_ok());
///
/// let err = documento.validate("000").unwrap_err();
/// assert_eq!(err.code, "or_failed");
/// assert_eq!(err.nested.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "Nenhuma alternativa válida")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
