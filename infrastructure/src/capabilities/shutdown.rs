//! `shutdown`: power off the machine after a delay.

use super::process::ProgramInvocation;
use async_trait::async_trait;
use toolgate_domain::{Capability, CapabilityDescriptor, CapabilityError};

pub const SHUTDOWN: &str = "shutdown";

/// Seconds to wait when no delay is given
pub const DEFAULT_DELAY_SECS: u32 = 60;

pub struct Shutdown {
    descriptor: CapabilityDescriptor,
}

impl Shutdown {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new(
                SHUTDOWN,
                "Shut down the computer (argument: delay in seconds, default 60)",
            )
            .elevated(),
        }
    }

    /// Parse the optional delay parameter
    pub fn delay_secs(parameters: &[String]) -> Result<u32, CapabilityError> {
        match parameters.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            None => Ok(DEFAULT_DELAY_SECS),
            Some(raw) => raw.parse().map_err(|_| {
                CapabilityError::ExecutionFailed(format!("invalid shutdown delay '{}'", raw))
            }),
        }
    }

    pub fn invocation(delay_secs: u32) -> ProgramInvocation {
        if cfg!(target_os = "windows") {
            ProgramInvocation::new("shutdown")
                .args(["/s", "/t"])
                .arg(delay_secs.to_string())
        } else {
            // Unix shutdown counts in whole minutes
            let minutes = delay_secs.div_ceil(60);
            let when = if minutes == 0 {
                "now".to_string()
            } else {
                format!("+{}", minutes)
            };
            ProgramInvocation::new("shutdown").arg("-h").arg(when)
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for Shutdown {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn execute(&self, parameters: &[String]) -> Result<bool, CapabilityError> {
        let delay = Self::delay_secs(parameters)?;
        Self::invocation(delay).status().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_elevation() {
        assert!(Shutdown::new().requires_elevation());
    }

    #[test]
    fn test_delay_parsing() {
        assert_eq!(Shutdown::delay_secs(&[]).unwrap(), 60);
        assert_eq!(Shutdown::delay_secs(&["".to_string()]).unwrap(), 60);
        assert_eq!(Shutdown::delay_secs(&["30".to_string()]).unwrap(), 30);
        assert!(Shutdown::delay_secs(&["soon".to_string()]).is_err());
        assert!(Shutdown::delay_secs(&["-5".to_string()]).is_err());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_invocation() {
        assert_eq!(Shutdown::invocation(60).to_string(), "shutdown /s /t 60");
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_unix_invocation_rounds_up_to_minutes() {
        assert_eq!(Shutdown::invocation(0).to_string(), "shutdown -h now");
        assert_eq!(Shutdown::invocation(30).to_string(), "shutdown -h +1");
        assert_eq!(Shutdown::invocation(60).to_string(), "shutdown -h +1");
        assert_eq!(Shutdown::invocation(61).to_string(), "shutdown -h +2");
    }
}
