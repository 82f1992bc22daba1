//! Safety configuration from TOML (`[safety]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use toolgate_domain::{DestructiveOperationClassifier, HilMode};

/// Raw safety configuration from TOML
///
/// # Example
///
/// ```toml
/// [safety]
/// hil_mode = "interactive"                 # "interactive", "auto_reject", "auto_approve"
/// confirmation_ttl_secs = 0                # 0 keeps confirmations for the whole session
/// extra_destructive_tools = ["format_disk"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSafetyConfig {
    /// How confirmation requests are answered
    pub hil_mode: String,
    /// Lifetime of a recorded confirmation in seconds (0 = no expiry)
    pub confirmation_ttl_secs: u64,
    /// Tools that need confirmation on top of the built-in set
    pub extra_destructive_tools: Vec<String>,
}

impl Default for FileSafetyConfig {
    fn default() -> Self {
        Self {
            hil_mode: HilMode::default().as_str().to_string(),
            confirmation_ttl_secs: 0,
            extra_destructive_tools: Vec::new(),
        }
    }
}

impl FileSafetyConfig {
    /// Parse hil_mode string into HilMode enum, returning a warning on failure.
    pub fn parse_hil_mode(&self) -> (HilMode, Option<ConfigValidationError>) {
        match self.hil_mode.parse::<HilMode>() {
            Ok(mode) => (mode, None),
            Err(_) => (
                HilMode::default(),
                Some(ConfigValidationError::InvalidHilMode(self.hil_mode.clone())),
            ),
        }
    }

    /// The built-in destructive set plus `extra_destructive_tools`
    pub fn to_classifier(&self) -> DestructiveOperationClassifier {
        DestructiveOperationClassifier::new().with_tools(&self.extra_destructive_tools)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues: Vec<_> = self.parse_hil_mode().1.into_iter().collect();
        if self
            .extra_destructive_tools
            .iter()
            .any(|t| t.trim().is_empty())
        {
            issues.push(ConfigValidationError::EmptyToolName);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hil_mode() {
        let config = FileSafetyConfig {
            hil_mode: "auto-reject".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_hil_mode(), (HilMode::AutoReject, None));
    }

    #[test]
    fn test_invalid_hil_mode_falls_back_to_interactive() {
        let config = FileSafetyConfig {
            hil_mode: "yolo".to_string(),
            ..Default::default()
        };
        let (mode, issue) = config.parse_hil_mode();
        assert_eq!(mode, HilMode::Interactive);
        assert!(matches!(issue, Some(ConfigValidationError::InvalidHilMode(v)) if v == "yolo"));
    }

    #[test]
    fn test_classifier_includes_extra_tools() {
        let config = FileSafetyConfig {
            extra_destructive_tools: vec!["Format_Disk".to_string()],
            ..Default::default()
        };
        let classifier = config.to_classifier();
        assert!(classifier.requires_confirmation("format_disk"));
        assert!(classifier.requires_confirmation("shutdown"));
    }

    #[test]
    fn test_blank_extra_tool_is_reported() {
        let config = FileSafetyConfig {
            extra_destructive_tools: vec![" ".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate().as_slice(),
            [ConfigValidationError::EmptyToolName]
        ));
    }
}
