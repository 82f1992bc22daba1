//! Presentation settings shared by the config file and the CLI

mod output_format;

pub use output_format::OutputFormat;
