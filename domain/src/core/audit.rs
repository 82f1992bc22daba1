//! Audit entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One append-only audit record: when, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current UTC time
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(Utc::now(), message)
    }

    pub fn at(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Single-line rendering: `[Audit] <rfc3339> <message>`
    pub fn to_line(&self) -> String {
        format!(
            "[Audit] {} {}",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            self.message
        )
    }
}
