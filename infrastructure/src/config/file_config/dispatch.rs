//! Dispatch configuration from TOML (`[dispatch]` section)

use serde::{Deserialize, Serialize};
use toolgate_application::DispatchParams;

/// Raw dispatch configuration from TOML
///
/// ```toml
/// [dispatch]
/// capability_timeout_secs = 120   # 0 disables the timeout
/// scan_timeout_secs = 14400       # malware scans, 0 disables
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Upper bound on one capability invocation, in seconds
    pub capability_timeout_secs: u64,
    /// Upper bound on one `defender_scan`, in seconds
    pub scan_timeout_secs: u64,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            capability_timeout_secs: 120,
            scan_timeout_secs: 4 * 60 * 60,
        }
    }
}

impl FileDispatchConfig {
    pub fn to_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_capability_timeout_secs(self.capability_timeout_secs)
            .with_scan_timeout_secs(self.scan_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_params() {
        let params = FileDispatchConfig::default().to_params();
        assert_eq!(params.capability_timeout, Some(Duration::from_secs(120)));
        assert_eq!(params.scan_timeout, Some(Duration::from_secs(14_400)));

        let config = FileDispatchConfig {
            capability_timeout_secs: 0,
            scan_timeout_secs: 0,
        };
        assert_eq!(config.to_params().capability_timeout, None);
        assert_eq!(config.to_params().scan_timeout, None);
    }

    #[test]
    fn test_scan_timeout_from_toml() {
        let config: crate::config::FileConfig =
            toml::from_str("[dispatch]\nscan_timeout_secs = 30\n").unwrap();
        assert_eq!(config.dispatch.capability_timeout_secs, 120);
        assert_eq!(config.dispatch.to_params().scan_timeout, Some(Duration::from_secs(30)));
    }
}
