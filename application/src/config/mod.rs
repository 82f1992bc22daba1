//! Application-level configuration.
//!
//! - [`DispatchParams`]: capability invocation control (timeouts)

pub mod dispatch_params;

pub use dispatch_params::{DEFAULT_CAPABILITY_TIMEOUT, DEFAULT_SCAN_TIMEOUT, DispatchParams};
