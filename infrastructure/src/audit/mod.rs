//! Audit sink adapters.
//!
//! - [`TracingAuditSink`] forwards entries to the operational log
//! - [`JsonlAuditSink`] appends entries to a JSONL file
//! - [`FanoutAuditSink`] copies every entry to several sinks

mod fanout;
mod jsonl;
mod tracing_sink;

pub use fanout::FanoutAuditSink;
pub use jsonl::JsonlAuditSink;
pub use tracing_sink::{AUDIT_TARGET, TracingAuditSink};
