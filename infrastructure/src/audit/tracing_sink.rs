//! Audit sink that writes to `tracing`.

use toolgate_application::ports::audit_sink::AuditSink;
use toolgate_domain::AuditEntry;

/// Tracing target for audit events, for filtering (`RUST_LOG=audit=info`)
pub const AUDIT_TARGET: &str = "audit";

/// Emits each entry as an `info` event on the [`AUDIT_TARGET`] target.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn log(&self, entry: AuditEntry) {
        tracing::info!(target: AUDIT_TARGET, "{}", entry.to_line());
    }
}
