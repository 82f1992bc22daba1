//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod dispatch;
mod logging;
mod output;
mod safety;

pub use audit::FileAuditConfig;
pub use dispatch::FileDispatchConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use safety::FileSafetyConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
///
/// All of these are recoverable: the affected setting falls back to its
/// default and the caller reports the issue as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("safety.hil_mode: unknown value '{0}', falling back to 'interactive'")]
    InvalidHilMode(String),

    #[error("safety.extra_destructive_tools: tool names cannot be empty")]
    EmptyToolName,

    #[error("{0}: path cannot be empty")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Capability invocation settings
    pub dispatch: FileDispatchConfig,
    /// Confirmation gate settings
    pub safety: FileSafetyConfig,
    /// Audit trail settings
    pub audit: FileAuditConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.safety.validate());
        issues.extend(self.audit.validate());
        issues.extend(self.logging.validate());
        issues
    }
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
