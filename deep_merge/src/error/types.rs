//! Primary error enum for deep merge calls.

use thiserror::Error;

use crate::{function::Arity, value::ValueKind};

/// Convenience alias for results produced by this crate.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur while validating or merging arguments.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// A host function received an argument count outside its arity.
    #[error("{name}(): wrong number of arguments (given {given}, expected {expected})")]
    Arity {
        /// Name of the function that rejected the call.
        name: String,
        /// Accepted argument counts.
        expected: Arity,
        /// Number of arguments actually supplied.
        given: usize,
    },

    /// An argument was neither a mapping nor the null sentinel.
    #[error("unexpected argument type {kind}, only mapping arguments are accepted")]
    UnexpectedType {
        /// Zero-based position of the offending argument.
        index: usize,
        /// Runtime type of the offending argument.
        kind: ValueKind,
    },

    /// The merged mapping could not be deserialised into the requested type.
    #[error("failed to decode merged value: {source}")]
    Decode {
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// No host function is registered under the requested name.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// Name that failed to resolve.
        name: String,
    },
}

impl MergeError {
    /// Construct an arity error for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_merge::{Arity, MergeError};
    ///
    /// let err = MergeError::arity("deep_merge", Arity::AtLeast(2), 1);
    /// assert!(err.to_string().contains("wrong number of arguments"));
    /// ```
    #[must_use]
    pub fn arity(name: impl Into<String>, expected: Arity, given: usize) -> Self {
        Self::Arity {
            name: name.into(),
            expected,
            given,
        }
    }

    /// Construct a type error for the argument at `index`.
    #[must_use]
    pub const fn unexpected_type(index: usize, kind: ValueKind) -> Self {
        Self::UnexpectedType { index, kind }
    }
}
