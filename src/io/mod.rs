//! Output handling for the CLI.
//!
//! This module provides:
//! - Output format selection (text, JSON)
//! - Exit codes derived from calculator errors
//! - The JSON result envelope printed by `--json`

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, ErrorDetails, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
