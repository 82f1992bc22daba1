//! Host capabilities and the registry that holds them.
//!
//! # Built-in Capabilities
//!
//! | Name | Capability | Elevated |
//! |------|------------|----------|
//! | `launch` | [`LaunchProgram`] | no |
//! | `explorer` | [`OpenFileBrowser`] | no |
//! | `settings` | [`OpenSettings`] | no |
//! | `calculator` | [`FixedProgram::calculator`] | no |
//! | `taskmgr` | [`FixedProgram::task_manager`] | no |
//! | `shutdown` | [`Shutdown`] | yes |
//!
//! `defender_scan` is not a registry entry; the dispatcher routes it to a
//! [`MalwareScanner`](toolgate_application::MalwareScanner) such as
//! [`platform_scanner`].

mod explorer;
mod fixed;
mod launch;
pub mod process;
mod registry;
mod scanner;
mod shutdown;

pub use explorer::OpenFileBrowser;
pub use fixed::FixedProgram;
pub use launch::{LaunchProgram, OpenSettings, launch_invocation, settings_invocation};
pub use registry::CapabilityRegistry;
pub use scanner::{ClamAvScanner, DefenderScanner, platform_scanner};
pub use shutdown::Shutdown;

/// Registry with every built-in capability
pub fn default_registry() -> CapabilityRegistry {
    CapabilityRegistry::new()
        .register(LaunchProgram::new())
        .register(OpenFileBrowser::new())
        .register(OpenSettings::new())
        .register(FixedProgram::calculator())
        .register(FixedProgram::task_manager())
        .register(Shutdown::new())
}
