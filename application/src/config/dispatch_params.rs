//! Dispatch parameters: how the gate runs capabilities.
//!
//! [`DispatchParams`] groups the static parameters the
//! [`ToolDispatcher`](crate::use_cases::dispatch_tool::ToolDispatcher) uses
//! around each capability invocation. These are application-layer concerns,
//! not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound on a single capability invocation
pub const DEFAULT_CAPABILITY_TIMEOUT: Duration = Duration::from_secs(120);

/// Default upper bound on a malware scan; a full scan can run for hours
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(4 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Timeout for one capability invocation. `None` waits forever.
    pub capability_timeout: Option<Duration>,
    /// Timeout for one malware scan. `None` waits forever.
    pub scan_timeout: Option<Duration>,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            capability_timeout: Some(DEFAULT_CAPABILITY_TIMEOUT),
            scan_timeout: Some(DEFAULT_SCAN_TIMEOUT),
        }
    }
}

impl DispatchParams {
    // ==================== Builder Methods ====================

    pub fn with_capability_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.capability_timeout = timeout;
        self
    }

    /// Set the timeout in whole seconds, `0` disables it
    pub fn with_capability_timeout_secs(self, secs: u64) -> Self {
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self.with_capability_timeout(timeout)
    }

    pub fn with_scan_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.scan_timeout = timeout;
        self
    }

    /// Set the scan timeout in whole seconds, `0` disables it
    pub fn with_scan_timeout_secs(self, secs: u64) -> Self {
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self.with_scan_timeout(timeout)
    }
}
