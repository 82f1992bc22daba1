//! Application layer for toolgate
//!
//! This crate contains the dispatch use cases, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_CAPABILITY_TIMEOUT, DEFAULT_SCAN_TIMEOUT, DispatchParams};
pub use ports::{
    audit_sink::{AuditSink, NoAuditSink},
    capability_catalog::CapabilityCatalog,
    confirmation_store::ConfirmationStore,
    human_confirmation::{
        AutoApproveConfirmation, AutoRejectConfirmation, HumanConfirmationError,
        HumanConfirmationPort,
    },
    malware_scanner::MalwareScanner,
};
pub use use_cases::confirm_and_dispatch::{ConfirmAndDispatchUseCase, DispatchedCall, ReplyOutcome};
pub use use_cases::dispatch_tool::{CapabilitySummary, ToolDispatcher};
