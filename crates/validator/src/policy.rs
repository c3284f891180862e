//! Tunable form policy: password length and minimum age.
//!
//! Defaults match the MiAudote sign-up rules. Deployments can override them
//! from JSON or from the environment:
//!
//! | Variable                        | Field                  |
//! |---------------------------------|------------------------|
//! | `MIAUDOTE_PASSWORD_MIN_LENGTH`  | `password_min_length`  |
//! | `MIAUDOTE_MINIMUM_AGE`          | `minimum_age`          |

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

use crate::validators::{BirthDate, DEFAULT_MINIMUM_AGE, DEFAULT_PASSWORD_MIN_LENGTH, Password};

/// Environment variable overriding [`Policy::password_min_length`].
pub const PASSWORD_MIN_LENGTH_VAR: &str = "MIAUDOTE_PASSWORD_MIN_LENGTH";

/// Environment variable overriding [`Policy::minimum_age`].
pub const MINIMUM_AGE_VAR: &str = "MIAUDOTE_MINIMUM_AGE";

/// Errors raised while building a [`Policy`].
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// An environment variable held something other than an integer.
    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidVar {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The JSON document could not be parsed.
    #[error("invalid policy JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A zero minimum would accept the empty password.
    #[error("password_min_length must be at least 1")]
    ZeroPasswordLength,
}

/// Validation policy shared by the sign-up forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Minimum number of characters in a password.
    pub password_min_length: usize,

    /// Minimum age, in years, of an adopter.
    pub minimum_age: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}

impl Policy {
    /// Parses a policy from JSON; missing keys keep their defaults.
    ///
    /// ```
    /// use miaudote_validator::Policy;
    ///
    /// let policy = Policy::from_json(r#"{"minimum_age": 18}"#).unwrap();
    /// assert_eq!(policy.minimum_age, 18);
    /// assert_eq!(policy.password_min_length, 8);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Builds a policy from `MIAUDOTE_*` environment variables.
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds a policy from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(value) = lookup(PASSWORD_MIN_LENGTH_VAR) {
            policy.password_min_length = parse_var(PASSWORD_MIN_LENGTH_VAR, value)?;
        }
        if let Some(value) = lookup(MINIMUM_AGE_VAR) {
            policy.minimum_age = parse_var(MINIMUM_AGE_VAR, value)?;
        }

        policy.validate()?;
        tracing::trace!(
            password_min_length = policy.password_min_length,
            minimum_age = policy.minimum_age,
            "resolved form policy"
        );
        Ok(policy)
    }

    /// Checks the policy for values that would disable a rule.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.password_min_length == 0 {
            return Err(PolicyError::ZeroPasswordLength);
        }
        Ok(())
    }

    /// The password validator for this policy.
    #[must_use]
    pub const fn password(&self) -> Password {
        Password::new(self.password_min_length)
    }

    /// The birth-date validator for this policy.
    #[must_use]
    pub const fn birth_date(&self) -> BirthDate {
        BirthDate::new(self.minimum_age)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, PolicyError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|source| PolicyError::InvalidVar { var, value, source })
}
