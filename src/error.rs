//! Crate-wide error type
//!
//! Every fallible operation in the registry, resolver and public API returns
//! [`AugmentResult`]. Errors are also reported on the diagnostic side channel
//! (see [`crate::utils::diagnostics`]) before being handed back to the caller.

use thiserror::Error;

use crate::functional::kind::Kind;

/// Result alias used throughout the crate
pub type AugmentResult<T> = Result<T, AugmentError>;

/// Errors raised while registering, resolving or composing augmenters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AugmentError {
    /// `register` was called with something other than an object mapping.
    #[error("TypeError: Register method invoked with argument type '{invoked}', expected '{expected}'")]
    Type { invoked: Kind, expected: Kind },

    /// A named augmenter reference has no registry entry.
    #[error("ExistenceError: Cannot find '{augmenter}' augmenter")]
    Existence { augmenter: String },

    /// A mapping entry was not a function and cannot be stored.
    #[error("TypeError: Augmenter '{name}' has type '{invoked}', expected 'function'")]
    InvalidEntry { name: String, invoked: Kind },

    #[error("Augmenter name must not be empty")]
    EmptyName,

    /// Registration collided with an existing name under the reject policy.
    #[error("Augmenter '{name}' is already registered")]
    Duplicate { name: String },

    #[error("Registry lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AugmentError {
    /// Stable machine-readable code for the error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// let err = AugmentError::Existence { augmenter: "useMounted".into() };
    /// assert_eq!(err.code(), "EXISTENCE_ERROR");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            AugmentError::Type { .. } | AugmentError::InvalidEntry { .. } => "TYPE_ERROR",
            AugmentError::Existence { .. } => "EXISTENCE_ERROR",
            AugmentError::EmptyName => "EMPTY_NAME",
            AugmentError::Duplicate { .. } => "DUPLICATE",
            AugmentError::LockPoisoned(_) => "LOCK_POISONED",
            AugmentError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub(crate) fn existence(augmenter: &str) -> Self {
        AugmentError::Existence {
            augmenter: augmenter.to_string(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for AugmentError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AugmentError::LockPoisoned(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_error_message_names_both_kinds() {
        let err = AugmentError::Type {
            invoked: Kind::Array,
            expected: Kind::Object,
        };
        assert_eq!(
            err.to_string(),
            "TypeError: Register method invoked with argument type 'array', expected 'object'"
        );
        assert_eq!(err.code(), "TYPE_ERROR");
    }

    #[test]
    fn existence_error_message_names_augmenter() {
        let err = AugmentError::existence("useNavigation");
        assert_eq!(
            err.to_string(),
            "ExistenceError: Cannot find 'useNavigation' augmenter"
        );
    }
}
