//! Audit configuration from TOML (`[audit]` section)

use super::{ConfigValidationError, expand_home};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit configuration from TOML
///
/// ```toml
/// [audit]
/// enabled = true
/// path = "~/.local/state/toolgate/audit.jsonl"   # optional JSONL trail
/// ```
///
/// With `enabled = true` audit entries always go to the `audit` tracing
/// target; `path` additionally appends them to a JSONL file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    pub enabled: bool,
    pub path: Option<String>,
}

impl Default for FileAuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileAuditConfig {
    /// JSONL path with a leading `~/` expanded
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(expand_home)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        match &self.path {
            Some(p) if p.trim().is_empty() => vec![ConfigValidationError::EmptyPath("audit.path")],
            _ => Vec::new(),
        }
    }
}
