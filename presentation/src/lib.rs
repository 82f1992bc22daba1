//! Presentation layer for toolgate
//!
//! This crate contains the CLI definitions, the terminal confirmation
//! prompt and the output formatter.

pub mod cli;
pub mod confirmation;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use confirmation::InteractiveConfirmation;
pub use output::console::ConsoleFormatter;
