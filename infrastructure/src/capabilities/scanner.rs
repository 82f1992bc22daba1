//! Malware scanner adapters.
//!
//! | Scanner | Binary | Quick | Full |
//! |---------|--------|-------|------|
//! | [`DefenderScanner`] | `MpCmdRun.exe` | `-Scan -ScanType 1` | `-Scan -ScanType 2` |
//! | [`ClamAvScanner`] | `clamscan` | home directory | `/` |

use super::process::ProgramInvocation;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use toolgate_application::ports::malware_scanner::MalwareScanner;
use toolgate_domain::CapabilityError;
use tracing::{debug, info};

/// Report used when the scanner printed nothing
fn empty_report(full: bool) -> String {
    if full {
        "Full scan completed".to_string()
    } else {
        "Quick scan completed".to_string()
    }
}

async fn run_scan(invocation: ProgramInvocation, full: bool) -> Result<String, CapabilityError> {
    info!("Running scan: {}", invocation);
    let (_, report) = invocation.output().await?;
    debug!("Scan report is {} bytes", report.len());
    if report.is_empty() {
        Ok(empty_report(full))
    } else {
        Ok(report)
    }
}

/// Microsoft Defender command-line scanner
pub struct DefenderScanner {
    binary: Option<PathBuf>,
}

impl DefenderScanner {
    /// Locate `MpCmdRun.exe` under `%ProgramFiles%\Windows Defender`, then on `PATH`
    pub fn detect() -> Self {
        let installed = std::env::var_os("ProgramFiles")
            .map(|dir| PathBuf::from(dir).join("Windows Defender").join("MpCmdRun.exe"))
            .filter(|path| path.is_file());
        let binary = installed.or_else(|| which::which("MpCmdRun").ok());
        Self { binary }
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }

    pub fn scan_args(full: bool) -> [&'static str; 3] {
        ["-Scan", "-ScanType", if full { "2" } else { "1" }]
    }
}

#[async_trait]
impl MalwareScanner for DefenderScanner {
    fn display_name(&self) -> &str {
        "Windows Defender"
    }

    async fn is_available(&self) -> bool {
        self.binary.as_ref().is_some_and(|b| b.is_file())
    }

    async fn scan(&self, full: bool) -> Result<String, CapabilityError> {
        let binary = self
            .binary
            .as_ref()
            .ok_or_else(|| CapabilityError::Unsupported("Windows Defender not found".to_string()))?;
        let invocation =
            ProgramInvocation::new(binary.to_string_lossy()).args(Self::scan_args(full));
        run_scan(invocation, full).await
    }
}

/// ClamAV `clamscan`
pub struct ClamAvScanner {
    binary: Option<PathBuf>,
}

impl ClamAvScanner {
    pub fn detect() -> Self {
        Self {
            binary: which::which("clamscan").ok(),
        }
    }

    pub fn scan_args(full: bool) -> Vec<String> {
        let root = if full {
            PathBuf::from("/")
        } else {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
        };
        vec![
            "--infected".to_string(),
            "--recursive".to_string(),
            root.to_string_lossy().into_owned(),
        ]
    }
}

#[async_trait]
impl MalwareScanner for ClamAvScanner {
    fn display_name(&self) -> &str {
        "ClamAV"
    }

    async fn is_available(&self) -> bool {
        self.binary.is_some()
    }

    async fn scan(&self, full: bool) -> Result<String, CapabilityError> {
        let binary = self
            .binary
            .as_ref()
            .ok_or_else(|| CapabilityError::Unsupported("clamscan not found".to_string()))?;
        let invocation =
            ProgramInvocation::new(binary.to_string_lossy()).args(Self::scan_args(full));
        run_scan(invocation, full).await
    }
}

/// The scanner native to this platform
pub fn platform_scanner() -> Arc<dyn MalwareScanner> {
    if cfg!(target_os = "windows") {
        Arc::new(DefenderScanner::detect())
    } else {
        Arc::new(ClamAvScanner::detect())
    }
}
