//! Terminal confirmation prompt

mod interactive;

pub use interactive::{InteractiveConfirmation, parse_decision};
