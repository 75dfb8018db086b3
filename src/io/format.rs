//! Output format selection.

use serde::{Deserialize, Serialize};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain human-readable lines
    #[default]
    Text,
    /// One JSON envelope per command
    Json,
}

impl OutputFormat {
    /// Resolve the effective format: a `--json` flag wins over configuration.
    pub fn from_json_flag(json: bool, configured: OutputFormat) -> Self {
        if json { OutputFormat::Json } else { configured }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}
