//! Confirmation store adapters.
//!
//! Provides [`InMemoryConfirmationStore`], the session-scoped implementation
//! of the [`ConfirmationStore`](toolgate_application::ConfirmationStore) port.

mod in_memory;

pub use in_memory::InMemoryConfirmationStore;
