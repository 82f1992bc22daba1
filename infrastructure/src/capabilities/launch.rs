//! `launch` and `settings`: start a program by name or open the settings panel.

use super::process::{ProgramInvocation, shell_open};
use async_trait::async_trait;
use toolgate_domain::safety::{SETTINGS_MONIKER, forbidden_target_char, is_power_program};
use toolgate_domain::{Capability, CapabilityDescriptor, CapabilityError};
use tracing::debug;

pub const LAUNCH: &str = "launch";
pub const SETTINGS: &str = "settings";

/// How to open the system settings panel on this platform
pub fn settings_invocation() -> ProgramInvocation {
    if cfg!(target_os = "windows") {
        shell_open(SETTINGS_MONIKER)
    } else if cfg!(target_os = "macos") {
        shell_open("x-apple.systempreferences:")
    } else {
        ProgramInvocation::new("gnome-control-center")
    }
}

/// Decide how to start `target`.
///
/// The settings moniker maps to the platform's settings panel. A name found
/// on `PATH` is started directly; anything else goes to the desktop's
/// default handler. Power programs and targets with shell metacharacters are
/// refused; `shutdown` has its own capability.
pub fn launch_invocation(target: &str) -> Result<ProgramInvocation, CapabilityError> {
    if let Some(c) = forbidden_target_char(target) {
        return Err(CapabilityError::ExecutionFailed(format!(
            "launch target contains '{}'",
            c
        )));
    }
    if is_power_program(target) {
        return Err(CapabilityError::ExecutionFailed(format!(
            "'{}' cannot be started through launch",
            target
        )));
    }
    if target.eq_ignore_ascii_case(SETTINGS_MONIKER) {
        return Ok(settings_invocation());
    }
    let invocation = match which::which(target) {
        Ok(path) if !is_power_program(&path.to_string_lossy()) => {
            debug!("Launching {} from {}", target, path.display());
            ProgramInvocation::new(path.to_string_lossy())
        }
        Ok(path) => {
            return Err(CapabilityError::ExecutionFailed(format!(
                "'{}' resolves to {}",
                target,
                path.display()
            )));
        }
        Err(_) => shell_open(target),
    };
    Ok(invocation)
}

/// Starts the program named by the first parameter
pub struct LaunchProgram {
    descriptor: CapabilityDescriptor,
}

impl LaunchProgram {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new(
                LAUNCH,
                "Launch an application by name (argument: target)",
            ),
        }
    }
}

impl Default for LaunchProgram {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for LaunchProgram {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn execute(&self, parameters: &[String]) -> Result<bool, CapabilityError> {
        let target = parameters
            .first()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or(CapabilityError::MissingParameter("target"))?;

        launch_invocation(target)?.spawn()
    }
}

/// Opens the system settings panel
pub struct OpenSettings {
    descriptor: CapabilityDescriptor,
}

impl OpenSettings {
    pub fn new() -> Self {
        Self {
            descriptor: CapabilityDescriptor::new(SETTINGS, "Open the system settings panel"),
        }
    }
}

impl Default for OpenSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for OpenSettings {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn execute(&self, _parameters: &[String]) -> Result<bool, CapabilityError> {
        settings_invocation().spawn()
    }
}
