//! Prelude module for convenient imports.
//!
//! `use miaudote_validator::prelude::*;` brings in the traits, error types,
//! validators, combinators and forms.

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Or, and, or};

// ============================================================================
// FORMS AND POLICY
// ============================================================================

pub use crate::forms::{AdotanteSignup, ParceiroSignup, Signup, validate_signup_json};
pub use crate::outcome::Outcome;
pub use crate::policy::{Policy, PolicyError};
