//! Tool domain module
//!
//! Defines what a caller can ask the gate to do and what it gets back.
//!
//! ```text
//! ┌────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ ToolInvocation │───▶│ Capability       │───▶│ ExecutionOutcome │
//! │ (name + args)  │    │ (registry entry) │    │ (uniform result) │
//! └────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolInvocation`]: tool name, ordered [`ToolArguments`], `confirmed` flag
//! - [`ToolArgument`]: string / number / bool argument value
//! - [`Capability`]: one registrable host operation
//! - [`CapabilityDescriptor`]: name, description, elevation flag
//! - [`ExecutionOutcome`]: success / confirmation request / failure
//! - [`ConfirmationRequest`]: payload of the ```` ```confirm ```` block
//!
//! Parameter projection ([`project_parameters`]) turns named arguments into
//! the positional list each capability takes.

pub mod blocks;
pub mod capability;
pub mod entities;
pub mod projection;
pub mod value_objects;

pub use blocks::{
    ConfirmationRequest, ParsedReply, ToolCallBlock, extract_confirmation, parse_tool_blocks,
};
pub use capability::{Capability, CapabilityError};
pub use entities::{CapabilityDescriptor, ToolArgument, ToolArguments, ToolInvocation};
pub use projection::project_parameters;
pub use value_objects::ExecutionOutcome;
