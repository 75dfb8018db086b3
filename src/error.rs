//! Error types for calculator operations.

use thiserror::Error;

/// Errors returned by arithmetic and validation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A value outside its required domain (negative dimension, non-positive number).
    #[error("{reason}")]
    InvalidArgument { reason: String },

    /// An input of the wrong kind, such as text where a number is required.
    #[error("{reason}")]
    TypeMismatch { reason: String },

    #[error("Integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl CalcError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        CalcError::TypeMismatch {
            reason: reason.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument { .. } => "invalid_argument",
            CalcError::TypeMismatch { .. } => "type_mismatch",
            CalcError::Overflow { .. } => "overflow",
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_reason() {
        let err = CalcError::invalid_argument("Number must be positive");
        assert_eq!(err.to_string(), "Number must be positive");
        assert_eq!(err.kind(), "invalid_argument");
    }

    #[test]
    fn test_overflow_display() {
        let err = CalcError::Overflow {
            operation: "factorial",
        };
        assert_eq!(err.to_string(), "Integer overflow in factorial");
        assert_eq!(err.kind(), "overflow");
    }
}
