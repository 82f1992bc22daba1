//! Capabilities that always start the same program.

use super::process::ProgramInvocation;
use async_trait::async_trait;
use toolgate_domain::{Capability, CapabilityDescriptor, CapabilityError};

pub const CALCULATOR: &str = "calculator";
pub const TASK_MANAGER: &str = "taskmgr";

/// Starts a fixed program and ignores its parameters
pub struct FixedProgram {
    descriptor: CapabilityDescriptor,
    invocation: ProgramInvocation,
}

impl FixedProgram {
    pub fn new(descriptor: CapabilityDescriptor, invocation: ProgramInvocation) -> Self {
        Self {
            descriptor,
            invocation,
        }
    }

    pub fn calculator() -> Self {
        let invocation = if cfg!(target_os = "windows") {
            ProgramInvocation::new("calc.exe")
        } else if cfg!(target_os = "macos") {
            ProgramInvocation::new("open").args(["-a", "Calculator"])
        } else {
            ProgramInvocation::new("gnome-calculator")
        };
        Self::new(
            CapabilityDescriptor::new(CALCULATOR, "Open the calculator"),
            invocation,
        )
    }

    pub fn task_manager() -> Self {
        let invocation = if cfg!(target_os = "windows") {
            ProgramInvocation::new("taskmgr.exe")
        } else if cfg!(target_os = "macos") {
            ProgramInvocation::new("open").args(["-a", "Activity Monitor"])
        } else {
            ProgramInvocation::new("gnome-system-monitor")
        };
        Self::new(
            CapabilityDescriptor::new(TASK_MANAGER, "Open the task manager"),
            invocation,
        )
    }

    pub fn invocation(&self) -> &ProgramInvocation {
        &self.invocation
    }
}

#[async_trait]
impl Capability for FixedProgram {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    async fn execute(&self, _parameters: &[String]) -> Result<bool, CapabilityError> {
        self.invocation.spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(FixedProgram::calculator().name(), "calculator");
        assert_eq!(FixedProgram::task_manager().name(), "taskmgr");
    }

    #[tokio::test]
    async fn test_missing_binary_surfaces_as_error() {
        let program = FixedProgram::new(
            CapabilityDescriptor::new("ghost", "never installed"),
            ProgramInvocation::new("toolgate-no-such-program-7f3a"),
        );
        assert!(program.execute(&["ignored".to_string()]).await.is_err());
    }
}
