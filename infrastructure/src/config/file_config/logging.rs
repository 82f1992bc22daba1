//! Logging configuration from TOML (`[logging]` section)

use super::{ConfigValidationError, expand_home};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// file = "~/.local/state/toolgate/toolgate.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostics to this file
    pub file: Option<String>,
}

impl FileLoggingConfig {
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(expand_home)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        match &self.file {
            Some(p) if p.trim().is_empty() => vec![ConfigValidationError::EmptyPath("logging.file")],
            _ => Vec::new(),
        }
    }
}
