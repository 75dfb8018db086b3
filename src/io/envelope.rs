//! JSON output envelope for all CLI commands.
//!
//! Every command run with `--json` prints exactly one envelope so results
//! can be piped into other tools and checked by CI scripts.

use serde::Serialize;

use crate::error::CalcError;
use crate::io::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Message type for stream discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Successful result
    Result,
    /// Error occurred
    Error,
}

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    InvalidArgument,
    TypeMismatch,
    Overflow,
    ConfigError,
}

impl ResultCode {
    /// Exit code the binary reports alongside this result code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Ok => ExitCode::Success,
            Self::InvalidArgument => ExitCode::InvalidArgument,
            Self::TypeMismatch => ExitCode::TypeMismatch,
            Self::Overflow => ExitCode::Overflow,
            Self::ConfigError => ExitCode::GeneralError,
        }
    }
}

impl From<&CalcError> for ResultCode {
    fn from(err: &CalcError) -> Self {
        match err {
            CalcError::InvalidArgument { .. } => ResultCode::InvalidArgument,
            CalcError::TypeMismatch { .. } => ResultCode::TypeMismatch,
            CalcError::Overflow { .. } => ResultCode::Overflow,
        }
    }
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Message type for stream discrimination
    #[serde(rename = "type")]
    pub message_type: MessageType,

    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Result payload (null on error)
    pub data: Option<T>,

    /// Error details (null on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,

    /// Response metadata
    pub meta: Meta,
}

/// Error details attached to failed operations.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    /// Error kind, e.g. `invalid_argument`
    pub kind: String,

    /// Offending inputs, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    /// Schema version (semver)
    pub schema_version: String,

    /// Operation that produced this envelope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Execution time in microseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u64>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            operation: None,
            duration_us: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            message_type: MessageType::Result,
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.as_u8(),
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            error: None,
            meta: Meta::default(),
        }
    }

    /// Create an error envelope.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            status: Status::Error,
            code,
            exit_code: code.exit_code().as_u8(),
            message: message.into(),
            data: None,
            error: None,
            meta: Meta::default(),
        }
    }

    /// Create an error envelope from a calculator error.
    pub fn from_calc_error(err: &CalcError) -> Self {
        Self::error(ResultCode::from(err), err.to_string()).with_error_details(ErrorDetails {
            kind: err.kind().to_string(),
            context: None,
        })
    }

    /// Add custom message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set operation name in metadata.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.meta.operation = Some(operation.into());
        self
    }

    /// Set duration in metadata.
    pub fn with_duration_us(mut self, duration_us: u64) -> Self {
        self.meta.duration_us = Some(duration_us);
        self
    }

    /// Set error details.
    pub fn with_error_details(mut self, details: ErrorDetails) -> Self {
        self.error = Some(details);
        self
    }

    /// Attach input context to existing error details.
    pub fn with_error_context(mut self, context: serde_json::Value) -> Self {
        if let Some(details) = self.error.as_mut() {
            details.context = Some(context);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}
