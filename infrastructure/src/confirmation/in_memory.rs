//! In-memory confirmation store.
//!
//! Records live for the lifetime of the process. With a TTL configured, a
//! record older than the TTL counts as absent and is pruned on the next
//! access.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use toolgate_application::ports::confirmation_store::ConfirmationStore;
use tracing::debug;

/// Confirmation store keyed by lower-cased tool name.
///
/// Every operation takes the single internal mutex, so a check and a
/// confirm for the same tool never interleave.
#[derive(Debug, Default)]
pub struct InMemoryConfirmationStore {
    records: Mutex<HashMap<String, DateTime<Utc>>>,
    ttl: Option<Duration>,
}

impl InMemoryConfirmationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire confirmations after `ttl`
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the TTL in whole seconds, `0` keeps records forever
    pub fn with_ttl_secs(self, secs: u64) -> Self {
        match i64::try_from(secs) {
            Ok(secs) if secs > 0 => self.with_ttl(Duration::seconds(secs)),
            _ => self,
        }
    }

    /// When `tool_name` was confirmed, if it still is
    pub fn confirmed_at(&self, tool_name: &str) -> Option<DateTime<Utc>> {
        let key = normalize(tool_name);
        let mut records = self.lock();
        self.live_record(&mut records, &key, Utc::now())
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        let now = Utc::now();
        let mut records = self.lock();
        if let Some(ttl) = self.ttl {
            records.retain(|_, at| now - *at < ttl);
        }
        records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        // A poisoned map is still a valid map
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn live_record(
        &self,
        records: &mut HashMap<String, DateTime<Utc>>,
        key: &str,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let at = *records.get(key)?;
        match self.ttl {
            Some(ttl) if now - at >= ttl => {
                debug!("Confirmation for '{}' expired", key);
                records.remove(key);
                None
            }
            _ => Some(at),
        }
    }
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn is_confirmed(&self, tool_name: &str) -> bool {
        self.confirmed_at(tool_name).is_some()
    }

    fn confirm(&self, tool_name: &str) -> bool {
        let key = normalize(tool_name);
        if key.is_empty() {
            return false;
        }
        let now = Utc::now();
        let mut records = self.lock();
        if self.live_record(&mut records, &key, now).is_some() {
            return false;
        }
        records.insert(key, now);
        true
    }

    fn revoke(&self, tool_name: &str) -> bool {
        self.lock().remove(&normalize(tool_name)).is_some()
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

fn normalize(tool_name: &str) -> String {
    tool_name.trim().to_ascii_lowercase()
}
