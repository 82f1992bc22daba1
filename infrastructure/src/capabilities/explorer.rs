//! `explorer`: open the file browser at a path.

use super::process::{ProgramInvocation, shell_open};
use async_trait::async_trait;
use std::path::PathBuf;
use toolgate_domain::{Capability, CapabilityDescriptor, CapabilityError};

pub const EXPLORER: &str = "explorer";

/// Opens the platform file browser, at the user's home directory when no
/// path is given
pub struct OpenFileBrowser {
    descriptor: CapabilityDescriptor,
}

impl OpenFileBrowser {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new(
                EXPLORER,
                "Open the file browser (argument: path, defaults to the home directory)",
            ),
        }
    }

    /// Resolve the directory to open
    pub fn resolve_path(parameters: &[String]) -> Result<PathBuf, CapabilityError> {
        match parameters.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => dirs::home_dir().ok_or_else(|| {
                CapabilityError::ExecutionFailed("home directory is unknown".to_string())
            }),
        }
    }

    pub fn invocation(path: &std::path::Path) -> ProgramInvocation {
        let path = path.to_string_lossy();
        if cfg!(target_os = "windows") {
            ProgramInvocation::new("explorer.exe").arg(path)
        } else {
            shell_open(&path)
        }
    }
}

impl Default for OpenFileBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for OpenFileBrowser {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn execute(&self, parameters: &[String]) -> Result<bool, CapabilityError> {
        let path = Self::resolve_path(parameters)?;
        Self::invocation(&path).spawn()
    }
}
