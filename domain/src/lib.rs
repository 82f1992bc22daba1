//! Domain layer for toolgate
//!
//! This crate contains the core business logic, entities, and value objects
//! of the tool-dispatch safety gate. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools and capabilities
//!
//! A caller asks for a **tool** by name with a map of arguments. The gate
//! resolves the name to a registered **capability** and runs it, always
//! answering with an [`ExecutionOutcome`].
//!
//! ## Confirmation gate
//!
//! Some tools are **destructive** (shutdown, delete_file, ...). They only run
//! once a human has confirmed them, either on the call itself or through the
//! session's confirmation store.

pub mod config;
pub mod core;
pub mod safety;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::{audit::AuditEntry, error::DomainError};
pub use safety::{
    CommandRejection, CommandTextValidator, ConfirmationDecision, DestructiveOperationClassifier,
    HilMode, resolve_launch_target,
};
pub use tool::{
    Capability, CapabilityDescriptor, CapabilityError, ConfirmationRequest, ExecutionOutcome,
    ParsedReply, ToolArgument, ToolArguments, ToolCallBlock, ToolInvocation,
    extract_confirmation, parse_tool_blocks, project_parameters,
};
