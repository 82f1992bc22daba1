//! Port for the append-only audit trail.
//!
//! Separate from `tracing` diagnostics: the audit trail records every tool
//! the gate lets through, and adapters may persist it (JSONL file) or forward
//! it to the operational log.

use toolgate_domain::AuditEntry;

/// Append-only audit sink.
///
/// `log` is synchronous and infallible. Implementations swallow their own
/// write errors; a failing sink must never block or abort a dispatch.
pub trait AuditSink: Send + Sync {
    fn log(&self, entry: AuditEntry);
}

/// No-op sink for tests and when auditing is disabled
pub struct NoAuditSink;

impl AuditSink for NoAuditSink {
    fn log(&self, _entry: AuditEntry) {}
}
