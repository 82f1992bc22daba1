//! Capability Registry
//!
//! The [`CapabilityRegistry`] maps tool names to [`Capability`]
//! implementations and implements the
//! [`CapabilityCatalog`](toolgate_application::CapabilityCatalog) port the
//! dispatcher looks tools up through.
//!
//! # Usage
//!
//! ```ignore
//! use toolgate_infrastructure::capabilities::{CapabilityRegistry, LaunchProgram, Shutdown};
//!
//! let registry = CapabilityRegistry::new()
//!     .register(LaunchProgram::new())
//!     .register(Shutdown::new());
//!
//! assert!(registry.contains("LAUNCH"));
//! ```
//!
//! Names are matched case-insensitively. Registering a second capability
//! under an existing name replaces the first.

use std::collections::BTreeMap;
use std::sync::Arc;

use toolgate_application::ports::capability_catalog::CapabilityCatalog;
use toolgate_domain::{Capability, CapabilityDescriptor};

/// Name-keyed set of capabilities, built once at start-up
#[derive(Default)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability
    pub fn register<C: Capability + 'static>(self, capability: C) -> Self {
        self.register_arc(Arc::new(capability))
    }

    /// Register a capability (Arc version)
    pub fn register_arc(mut self, capability: Arc<dyn Capability>) -> Self {
        let key = normalize(capability.name());
        if self.capabilities.contains_key(&key) {
            tracing::debug!(capability = %key, "Replacing registered capability");
        } else {
            tracing::trace!(capability = %key, "Registered capability");
        }
        self.capabilities.insert(key, capability);
        self
    }

    /// Registered names, lower-cased and sorted
    pub fn names(&self) -> Vec<&str> {
        self.capabilities.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl CapabilityCatalog for CapabilityRegistry {
    fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.get(&normalize(name)).cloned()
    }

    fn descriptors(&self) -> Vec<CapabilityDescriptor> {
        self.capabilities
            .values()
            .map(|c| c.descriptor().clone())
            .collect()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
