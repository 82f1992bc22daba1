//! Port for the host's malware scanner.
//!
//! The `defender_scan` tool is routed here directly instead of through the
//! capability registry, because its result is a textual report rather than a
//! success flag.

use async_trait::async_trait;
use toolgate_domain::CapabilityError;

#[async_trait]
pub trait MalwareScanner: Send + Sync {
    /// Human-readable scanner name, used in "not available" messages
    fn display_name(&self) -> &str;

    /// Whether the scanner binary exists on this host
    async fn is_available(&self) -> bool;

    /// Run a quick scan, or a full scan when `full` is set, and return its report
    async fn scan(&self, full: bool) -> Result<String, CapabilityError>;
}
