//! Port definitions (interfaces for external adapters)

pub mod audit_sink;
pub mod capability_catalog;
pub mod confirmation_store;
pub mod human_confirmation;
pub mod malware_scanner;
