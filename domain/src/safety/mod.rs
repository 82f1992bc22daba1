//! Safety rules of the gate
//!
//! Pure, I/O-free policy pieces the dispatcher consults before anything runs:
//!
//! - [`CommandTextValidator`]: screen for raw free-text commands
//! - [`DestructiveOperationClassifier`]: which tools need human confirmation
//! - [`resolve_launch_target`]: normalization of `launch` targets
//! - [`HilMode`] / [`ConfirmationDecision`]: how confirmation requests are answered

pub mod command_text;
pub mod destructive;
pub mod hil;
pub mod launch_target;

pub use command_text::{CommandRejection, CommandTextValidator, MAX_COMMAND_CHARS};
pub use destructive::{
    DEFAULT_DESTRUCTIVE_TOOLS, DestructiveOperationClassifier, POWER_PROGRAMS, is_power_program,
};
pub use hil::{ConfirmationDecision, HilMode};
pub use launch_target::{
    FORBIDDEN_TARGET_CHARS, SETTINGS_MONIKER, forbidden_target_char, normalize_target,
    resolve_launch_target,
};
