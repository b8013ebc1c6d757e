//! Error types for the combinator library.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is [`FpError`]. The variants mirror the failure kinds a caller can
//! observe:
//!
//! - [`FpError::InvalidArgument`]: malformed construction input
//! - [`FpError::TypeMismatch`]: a value of the wrong shape reached an operation
//! - [`FpError::CycleDetected`]: deep equality found a self-referential structure
//! - [`FpError::NoMatch`]: no matcher pair accepted the value given to `match_on`
//! - [`FpError::Invocation`]: `invoke` was handed a non-sequence argument list
//! - [`FpError::Raised`]: a user-supplied function reported a failure
//!
//! No combinator recovers from these except [`safe`](crate::control::safe),
//! whose purpose is to replace any failure of the wrapped call with a
//! default value.

use crate::value::Value;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FpError>;

/// Represents errors raised by combinators and by user functions run through them.
///
/// `FpError` can also travel as data: [`Value::Error`] wraps one, which is
/// what [`either`](crate::control::either) and
/// [`recover`](crate::control::recover) branch on.
///
/// # Examples
///
/// ```rust
/// use pointfree::FpError;
///
/// let error = FpError::invalid_argument("path_lens", "path must be an array");
/// assert_eq!(
///     error.to_string(),
///     "invalid argument to path_lens: path must be an array"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FpError {
    /// Malformed construction input, such as a path lens built from a non-array.
    #[error("invalid argument to {operation}: {message}")]
    InvalidArgument {
        /// The operation that rejected its input.
        operation: &'static str,
        /// Human readable description of the problem.
        message: String,
    },

    /// A value of an incompatible shape reached an operation.
    #[error("type mismatch in {operation}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The operation that received the value.
        operation: &'static str,
        /// Description of the accepted shapes.
        expected: &'static str,
        /// Kind of the value actually received.
        found: String,
    },

    /// Deep equality revisited a node already on its own path.
    #[error("cycle detected, cannot determine equality")]
    CycleDetected,

    /// No matcher accepted the value.
    #[error("could not match on {value}")]
    NoMatch {
        /// The unmatched value.
        value: Value,
    },

    /// `invoke` was asked to apply a function to a non-sequence argument list.
    #[error("cannot invoke with a non-array argument list, found {found}")]
    Invocation {
        /// Kind of the value given as the argument list.
        found: String,
    },

    /// Failure reported by a user-supplied function.
    #[error("{0}")]
    Raised(String),
}

impl FpError {
    /// Creates an [`FpError::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// Creates an [`FpError::TypeMismatch`] describing the offending value.
    pub fn type_mismatch(operation: &'static str, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found: found.kind().to_string(),
        }
    }

    /// Creates an [`FpError::Raised`] from a message.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn type_mismatch_reports_the_found_kind() {
        let error = FpError::type_mismatch("lens_prop", "an array or object", &Value::from(3));
        assert_eq!(
            error.to_string(),
            "type mismatch in lens_prop: expected an array or object, found Number"
        );
    }

    #[rstest]
    fn no_match_renders_the_value() {
        let error = FpError::NoMatch {
            value: Value::from(42),
        };
        assert_eq!(error.to_string(), "could not match on 42");
    }

    #[rstest]
    fn cycle_detected_display() {
        assert_eq!(
            FpError::CycleDetected.to_string(),
            "cycle detected, cannot determine equality"
        );
    }

    #[rstest]
    fn raised_keeps_the_message() {
        assert_eq!(FpError::raised("boom"), FpError::Raised("boom".to_string()));
    }
}
