//! Port for looking up registered capabilities by name.

use std::sync::Arc;
use toolgate_domain::{Capability, CapabilityDescriptor};

/// Read-only view of the capability registry.
///
/// Lookups are case-insensitive. The catalog is built once at start-up and
/// never mutated while the dispatcher is serving requests.
pub trait CapabilityCatalog: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<dyn Capability>>;

    /// Descriptors of every registered capability, sorted by name
    fn descriptors(&self) -> Vec<CapabilityDescriptor>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
