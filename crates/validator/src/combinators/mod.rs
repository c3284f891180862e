//! Validator combinators
//!
//! - [`And`]: both validators must pass
//! - [`Or`]: at least one validator must pass
//!
//! Usually reached through [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod or;

pub use and::{And, and};
pub use or::{Or, or};
