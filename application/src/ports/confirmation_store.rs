//! Port for remembering which destructive tools a human has approved.
//!
//! Records are keyed by tool name, compared case-insensitively. One approval
//! covers every later invocation of that tool for the lifetime of the store
//! (or until an adapter-specific expiry kicks in).

/// Session-scoped record of human confirmations.
///
/// All methods take `&self`; implementations handle their own locking so the
/// store can be shared across concurrent dispatches behind an `Arc`.
pub trait ConfirmationStore: Send + Sync {
    /// Whether `tool_name` currently has a confirmation on record
    fn is_confirmed(&self, tool_name: &str) -> bool;

    /// Record a confirmation for `tool_name`.
    ///
    /// Idempotent. Returns `true` when a new record was created and `false`
    /// when one already existed.
    fn confirm(&self, tool_name: &str) -> bool;

    /// Drop the confirmation for `tool_name`, returning whether one existed
    fn revoke(&self, tool_name: &str) -> bool;

    /// Forget every confirmation
    fn clear(&self);
}
