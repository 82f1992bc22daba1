//! Infrastructure layer for toolgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: host capabilities, malware scanners, the
//! confirmation store, audit sinks, and configuration file loading.

pub mod audit;
pub mod capabilities;
pub mod config;
pub mod confirmation;

// Re-export commonly used types
pub use audit::{AUDIT_TARGET, FanoutAuditSink, JsonlAuditSink, TracingAuditSink};
pub use capabilities::{
    CapabilityRegistry, ClamAvScanner, DefenderScanner, default_registry, platform_scanner,
};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuditConfig, FileConfig, FileDispatchConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileSafetyConfig,
};
pub use confirmation::InMemoryConfirmationStore;
