//! Audit sink that copies entries to several sinks.

use std::sync::Arc;
use toolgate_application::ports::audit_sink::AuditSink;
use toolgate_domain::AuditEntry;

#[derive(Default)]
pub struct FanoutAuditSink {
    sinks: Vec<Arc<dyn AuditSink>>,
}

impl FanoutAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink (builder pattern)
    pub fn with_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AuditSink for FanoutAuditSink {
    fn log(&self, entry: AuditEntry) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.log(entry.clone());
            }
            last.log(entry);
        }
    }
}
