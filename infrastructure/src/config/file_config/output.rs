//! `[output]` section

use serde::{Deserialize, Serialize};

pub use toolgate_domain::OutputFormat as FileOutputFormat;

/// How results are rendered on the terminal
///
/// ```toml
/// [output]
/// format = "json"   # "text" or "json"; --output wins over this
/// color = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<FileOutputFormat>,
    /// ANSI colors in text output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
