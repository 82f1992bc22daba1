//! Tool domain value objects: the uniform dispatch result
//!
//! Every path through the dispatcher ends in an [`ExecutionOutcome`]:
//! input errors, policy refusals, confirmation requests and capability
//! results alike. Callers never see an `Err` from a dispatch.

use serde::Serialize;

/// Result of a dispatch attempt.
///
/// Fields are private so that a confirmation request can never also be a
/// success: `requires_confirmation == true` implies `success == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    success: bool,
    requires_confirmation: bool,
    message: String,
}

impl ExecutionOutcome {
    /// The capability ran and reported success
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            requires_confirmation: false,
            message: message.into(),
        }
    }

    /// Terminal failure: bad input, policy refusal or capability failure
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            requires_confirmation: false,
            message: message.into(),
        }
    }

    /// Nothing ran; a human must approve before the tool may execute
    pub fn confirmation_required(message: impl Into<String>) -> Self {
        Self {
            success: false,
            requires_confirmation: true,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded() {
        let outcome = ExecutionOutcome::succeeded("done");
        assert!(outcome.is_success());
        assert!(!outcome.requires_confirmation());
        assert_eq!(outcome.message(), "done");
    }

    #[test]
    fn test_confirmation_is_never_success() {
        let outcome = ExecutionOutcome::confirmation_required("please confirm");
        assert!(!outcome.is_success());
        assert!(outcome.requires_confirmation());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(ExecutionOutcome::failed("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["requiresConfirmation"], false);
        assert_eq!(json["message"], "nope");
    }
}
