//! Human confirmation port.
//!
//! Defines the interface for asking a human whether a destructive tool may
//! run. The dispatcher answers a destructive call with a confirmation
//! request; whoever drives it resolves that request through this port.
//!
//! # Implementations
//!
//! | Implementation | Mode | Behaviour |
//! |----------------|------|-----------|
//! | `AutoRejectConfirmation` | `auto_reject` | Always refuses |
//! | `AutoApproveConfirmation` | `auto_approve` | Always approves for the session |
//! | `InteractiveConfirmation` (presentation) | `interactive` | Prompts on the terminal |

use async_trait::async_trait;
use thiserror::Error;
use toolgate_domain::{ConfirmationDecision, ConfirmationRequest};

/// Error during human confirmation
#[derive(Error, Debug)]
pub enum HumanConfirmationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Confirmation cancelled")]
    Cancelled,
}

/// Port for resolving confirmation requests.
///
/// Implementations should present the tool name and its arguments and
/// return the human's decision.
#[async_trait]
pub trait HumanConfirmationPort: Send + Sync {
    async fn request_confirmation(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationDecision, HumanConfirmationError>;
}

/// Auto-reject implementation for `HilMode::AutoReject`.
///
/// This is the safest non-interactive mode: destructive tools never run.
pub struct AutoRejectConfirmation;

#[async_trait]
impl HumanConfirmationPort for AutoRejectConfirmation {
    async fn request_confirmation(
        &self,
        _request: &ConfirmationRequest,
    ) -> Result<ConfirmationDecision, HumanConfirmationError> {
        Ok(ConfirmationDecision::Reject)
    }
}

/// Auto-approve implementation for `HilMode::AutoApprove`.
///
/// # Warning
///
/// **Use with caution!** Every destructive tool the caller asks for will run,
/// including shutdown. Only use in a sandbox or for scripted runs where the
/// tool list is known in advance.
pub struct AutoApproveConfirmation;

#[async_trait]
impl HumanConfirmationPort for AutoApproveConfirmation {
    async fn request_confirmation(
        &self,
        _request: &ConfirmationRequest,
    ) -> Result<ConfirmationDecision, HumanConfirmationError> {
        Ok(ConfirmationDecision::Approve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_domain::ToolArguments;

    fn request() -> ConfirmationRequest {
        ConfirmationRequest::new("shutdown", ToolArguments::new())
    }

    #[tokio::test]
    async fn test_auto_reject_confirmation() {
        let port = AutoRejectConfirmation;
        let decision = port.request_confirmation(&request()).await.unwrap();
        assert_eq!(decision, ConfirmationDecision::Reject);
    }

    #[tokio::test]
    async fn test_auto_approve_confirmation() {
        let port = AutoApproveConfirmation;
        let decision = port.request_confirmation(&request()).await.unwrap();
        assert_eq!(decision, ConfirmationDecision::Approve);
    }
}
