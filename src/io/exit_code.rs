//! Process exit codes.

use crate::error::CalcError;

/// Exit codes reported by the `calcdemo` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Configuration or I/O failure
    GeneralError = 1,
    InvalidArgument = 2,
    TypeMismatch = 3,
    Overflow = 4,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<&CalcError> for ExitCode {
    fn from(err: &CalcError) -> Self {
        match err {
            CalcError::InvalidArgument { .. } => ExitCode::InvalidArgument,
            CalcError::TypeMismatch { .. } => ExitCode::TypeMismatch,
            CalcError::Overflow { .. } => ExitCode::Overflow,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let err = CalcError::invalid_argument("Number must be positive");
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidArgument);

        let err = CalcError::type_mismatch("Input must be a number");
        assert_eq!(ExitCode::from(&err).as_u8(), 3);

        let err = CalcError::Overflow { operation: "add" };
        assert_eq!(ExitCode::from(&err), ExitCode::Overflow);
        assert_eq!(ExitCode::Overflow.as_u8(), 4);
    }
}
