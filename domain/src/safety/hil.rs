//! Human-in-the-loop settings for the confirmation gate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a front-end answers confirmation requests raised by the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HilMode {
    /// Ask a human each time (default)
    #[default]
    Interactive,
    /// Approve every request without asking
    AutoApprove,
    /// Refuse every request without asking
    AutoReject,
}

impl HilMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HilMode::Interactive => "interactive",
            HilMode::AutoApprove => "auto_approve",
            HilMode::AutoReject => "auto_reject",
        }
    }
}

impl FromStr for HilMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "interactive" => Ok(HilMode::Interactive),
            "auto_approve" => Ok(HilMode::AutoApprove),
            "auto_reject" => Ok(HilMode::AutoReject),
            other => Err(format!("unknown hil mode '{}'", other)),
        }
    }
}

impl std::fmt::Display for HilMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A human's answer to a confirmation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationDecision {
    /// Run it, and remember the approval for this tool for the session
    Approve,
    /// Run it this one time only
    ApproveOnce,
    /// Do not run it
    Reject,
}

impl ConfirmationDecision {
    pub fn is_approved(&self) -> bool {
        !matches!(self, ConfirmationDecision::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hil_mode() {
        assert_eq!("interactive".parse::<HilMode>(), Ok(HilMode::Interactive));
        assert_eq!("auto-approve".parse::<HilMode>(), Ok(HilMode::AutoApprove));
        assert_eq!("AUTO_REJECT".parse::<HilMode>(), Ok(HilMode::AutoReject));
        assert!("sometimes".parse::<HilMode>().is_err());
    }

    #[test]
    fn test_default_is_interactive() {
        assert_eq!(HilMode::default(), HilMode::Interactive);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&HilMode::AutoApprove).unwrap();
        assert_eq!(json, "\"auto_approve\"");
        let mode: HilMode = serde_json::from_str("\"auto_reject\"").unwrap();
        assert_eq!(mode, HilMode::AutoReject);
    }

    #[test]
    fn test_decision_approval() {
        assert!(ConfirmationDecision::Approve.is_approved());
        assert!(ConfirmationDecision::ApproveOnce.is_approved());
        assert!(!ConfirmationDecision::Reject.is_approved());
    }
}
