//! Confirm-and-dispatch use case.
//!
//! Drives the gate on behalf of a front-end: when the dispatcher answers with
//! a confirmation request, the request is handed to a
//! [`HumanConfirmationPort`] and, if approved, resubmitted with
//! `confirmed = true`.
//!
//! # Decisions
//!
//! | Decision | Store | Re-run |
//! |----------|-------|--------|
//! | `Approve` | tool recorded for the session | yes |
//! | `ApproveOnce` | untouched | yes |
//! | `Reject` | untouched | no |

use crate::ports::human_confirmation::HumanConfirmationPort;
use crate::use_cases::dispatch_tool::{INVALID_ARGUMENTS_MESSAGE, ToolDispatcher};
use std::sync::Arc;
use toolgate_domain::{
    ConfirmationDecision, ExecutionOutcome, ToolArguments, ToolCallBlock, ToolInvocation,
    extract_confirmation, parse_tool_blocks,
};
use tracing::{debug, info, warn};

/// Result of dispatching one tool call found in an assistant reply
#[derive(Debug, Clone)]
pub struct DispatchedCall {
    pub call: ToolCallBlock,
    pub outcome: ExecutionOutcome,
}

/// Result of dispatching every tool call in an assistant reply
#[derive(Debug, Clone, Default)]
pub struct ReplyOutcome {
    /// Reply prose with the tool blocks removed
    pub text: String,
    pub calls: Vec<DispatchedCall>,
}

impl ReplyOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.calls.iter().all(|c| c.outcome.is_success())
    }
}

pub struct ConfirmAndDispatchUseCase {
    dispatcher: Arc<ToolDispatcher>,
    confirmation: Arc<dyn HumanConfirmationPort>,
}

impl ConfirmAndDispatchUseCase {
    pub fn new(
        dispatcher: Arc<ToolDispatcher>,
        confirmation: Arc<dyn HumanConfirmationPort>,
    ) -> Self {
        Self {
            dispatcher,
            confirmation,
        }
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Dispatch `invocation`, resolving at most one confirmation round
    pub async fn execute(&self, invocation: &ToolInvocation) -> ExecutionOutcome {
        let outcome = self.dispatcher.execute(invocation).await;
        if !outcome.requires_confirmation() {
            return outcome;
        }

        match self.resolve(outcome).await {
            Ok(tool) => {
                debug!("Re-running '{}' after approval", tool);
                let confirmed = invocation.clone().confirmed(true);
                self.dispatcher.execute(&confirmed).await
            }
            Err(outcome) => outcome,
        }
    }

    /// Screen and dispatch free command text with confirmation handling
    pub async fn execute_command_text(&self, text: &str) -> ExecutionOutcome {
        let outcome = self.dispatcher.execute_command_text(text, false).await;
        if !outcome.requires_confirmation() {
            return outcome;
        }

        match self.resolve(outcome).await {
            Ok(tool) => {
                debug!("Re-running '{}' after approval", tool);
                self.dispatcher.execute_command_text(text, true).await
            }
            Err(outcome) => outcome,
        }
    }

    /// Put a confirmation request in front of the human.
    ///
    /// `Ok` carries the approved tool name; `Err` is the final outcome.
    async fn resolve(&self, outcome: ExecutionOutcome) -> Result<String, ExecutionOutcome> {
        let Some((request, _)) = extract_confirmation(outcome.message()) else {
            warn!("Confirmation outcome without a readable request");
            return Err(outcome);
        };

        let decision = match self.confirmation.request_confirmation(&request).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!("Confirmation for '{}' failed: {}", request.name, e);
                return Err(ExecutionOutcome::failed(format!(
                    "Tool '{}' was not run: confirmation failed ({}).",
                    request.name, e
                )));
            }
        };

        match decision {
            ConfirmationDecision::Reject => {
                info!("Tool '{}' rejected by user", request.name);
                Err(ExecutionOutcome::failed(format!(
                    "Tool '{}' was not run: confirmation declined.",
                    request.name
                )))
            }
            ConfirmationDecision::Approve => {
                self.dispatcher.grant_confirmation(&request.name);
                Ok(request.name)
            }
            ConfirmationDecision::ApproveOnce => Ok(request.name),
        }
    }

    /// Decode JSON arguments, then dispatch with confirmation handling
    pub async fn execute_json(&self, tool_name: &str, arguments_json: &str) -> ExecutionOutcome {
        match ToolArguments::from_json(arguments_json) {
            Ok(arguments) => {
                let invocation = ToolInvocation::new(tool_name).with_arguments(arguments);
                self.execute(&invocation).await
            }
            Err(e) => {
                debug!("Rejecting arguments for '{}': {}", tool_name, e);
                ExecutionOutcome::failed(INVALID_ARGUMENTS_MESSAGE)
            }
        }
    }

    /// Dispatch every ```` ```tool ```` block of an assistant reply, in order
    pub async fn execute_reply(&self, reply: &str) -> ReplyOutcome {
        let parsed = parse_tool_blocks(reply);
        debug!("Reply carries {} tool call(s)", parsed.calls.len());

        let mut calls = Vec::with_capacity(parsed.calls.len());
        for call in parsed.calls {
            let outcome = self.execute_json(&call.name, &call.arguments_json).await;
            calls.push(DispatchedCall { call, outcome });
        }

        ReplyOutcome {
            text: parsed.text,
            calls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::confirmation_store::ConfirmationStore;
    use crate::ports::human_confirmation::{
        AutoApproveConfirmation, AutoRejectConfirmation, HumanConfirmationError,
    };
    use crate::use_cases::dispatch_tool::tests::{Fixture, fixture, fixture_with_destructive};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use toolgate_domain::ConfirmationRequest;

    struct ScriptedConfirmation {
        decision: ConfirmationDecision,
        seen: Mutex<Vec<ConfirmationRequest>>,
    }

    impl ScriptedConfirmation {
        fn new(decision: ConfirmationDecision) -> Self {
            Self {
                decision,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HumanConfirmationPort for ScriptedConfirmation {
        async fn request_confirmation(
            &self,
            request: &ConfirmationRequest,
        ) -> Result<ConfirmationDecision, HumanConfirmationError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.decision)
        }
    }

    struct BrokenConfirmation;

    #[async_trait]
    impl HumanConfirmationPort for BrokenConfirmation {
        async fn request_confirmation(
            &self,
            _request: &ConfirmationRequest,
        ) -> Result<ConfirmationDecision, HumanConfirmationError> {
            Err(HumanConfirmationError::Cancelled)
        }
    }

    fn use_case(fx: &Fixture, port: Arc<dyn HumanConfirmationPort>) -> ConfirmAndDispatchUseCase {
        ConfirmAndDispatchUseCase::new(fx.dispatcher.clone(), port)
    }

    #[tokio::test]
    async fn test_non_destructive_tool_skips_prompt() {
        let fx = fixture();
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::Reject));
        let uc = use_case(&fx, port.clone());

        let outcome = uc
            .execute(&ToolInvocation::new("launch").with_arg("target", "notepad"))
            .await;
        assert!(outcome.is_success());
        assert!(port.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_approve_records_and_runs() {
        let fx = fixture();
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::Approve));
        let uc = use_case(&fx, port.clone());

        let outcome = uc
            .execute(&ToolInvocation::new("shutdown").with_arg("delay", 30))
            .await;
        assert!(outcome.is_success());
        assert_eq!(fx.shutdown.calls.lock().unwrap()[0], vec!["30".to_string()]);
        assert!(fx.store.is_confirmed("shutdown"));

        let seen = port.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "shutdown");
    }

    #[tokio::test]
    async fn test_approve_once_leaves_store_untouched() {
        let fx = fixture();
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::ApproveOnce));
        let uc = use_case(&fx, port.clone());

        let outcome = uc.execute(&ToolInvocation::new("shutdown")).await;
        assert!(outcome.is_success());
        assert!(!fx.store.is_confirmed("shutdown"));

        uc.execute(&ToolInvocation::new("shutdown")).await;
        assert_eq!(port.seen.lock().unwrap().len(), 2);
        assert_eq!(fx.shutdown.call_count(), 2);
    }

    #[tokio::test]
    async fn test_session_approval_skips_later_prompts() {
        let fx = fixture();
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::Approve));
        let uc = use_case(&fx, port.clone());

        uc.execute(&ToolInvocation::new("shutdown")).await;
        uc.execute(&ToolInvocation::new("shutdown")).await;
        assert_eq!(port.seen.lock().unwrap().len(), 1);
        assert_eq!(fx.shutdown.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reject_does_not_run() {
        let fx = fixture();
        let uc = use_case(&fx, Arc::new(AutoRejectConfirmation));

        let outcome = uc.execute(&ToolInvocation::new("shutdown")).await;
        assert!(!outcome.is_success());
        assert!(!outcome.requires_confirmation());
        assert_eq!(outcome.message(), "Tool 'shutdown' was not run: confirmation declined.");
        assert_eq!(fx.shutdown.call_count(), 0);
        assert!(fx.audit.messages().is_empty());
    }

    #[tokio::test]
    async fn test_port_error_is_a_failed_outcome() {
        let fx = fixture();
        let uc = use_case(&fx, Arc::new(BrokenConfirmation));

        let outcome = uc.execute(&ToolInvocation::new("shutdown")).await;
        assert!(!outcome.is_success());
        assert!(outcome.message().contains("confirmation failed"));
        assert_eq!(fx.shutdown.call_count(), 0);
    }

    #[tokio::test]
    async fn test_command_text_goes_through_confirmation() {
        let fx = fixture_with_destructive("explorer");
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::ApproveOnce));
        let uc = use_case(&fx, port.clone());

        let outcome = uc.execute_command_text("explorer /tmp").await;
        assert!(outcome.is_success());
        let seen = port.seen.lock().unwrap();
        assert_eq!(seen[0].name, "explorer");
        assert_eq!(seen[0].arguments.get("target").and_then(|v| v.as_str()), Some("/tmp"));
        assert_eq!(fx.explorer.call_count(), 1);
        assert!(!fx.store.is_confirmed("explorer"));
    }

    #[tokio::test]
    async fn test_rejected_command_text_never_prompts() {
        let fx = fixture();
        let port = Arc::new(ScriptedConfirmation::new(ConfirmationDecision::Approve));
        let uc = use_case(&fx, port.clone());

        let outcome = uc.execute_command_text("launch notepad && rm -rf /").await;
        assert!(!outcome.is_success());
        assert!(outcome.message().starts_with("Command rejected by safety policy"));
        assert!(port.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reply_calls_run_in_order() {
        let fx = fixture();
        let uc = use_case(&fx, Arc::new(AutoApproveConfirmation));

        let reply = r#"Opening things for you.

```tool
{"name": "launch", "arguments": {"target": "calculator"}}
```

```tool
{"tool_calls": [
  {"tool": "explorer", "args": {"path": "/tmp"}},
  {"name": "shutdown", "arguments": "{\"delay\": \"10\"}"}
]}
```
"#;
        let result = uc.execute_reply(reply).await;

        assert_eq!(result.text, "Opening things for you.");
        let names: Vec<_> = result.calls.iter().map(|c| c.call.name.as_str()).collect();
        assert_eq!(names, vec!["launch", "explorer", "shutdown"]);
        assert!(result.all_succeeded());
        assert_eq!(fx.launch.calls.lock().unwrap()[0], vec!["calc".to_string()]);
        assert_eq!(fx.shutdown.calls.lock().unwrap()[0], vec!["10".to_string()]);
    }

    #[tokio::test]
    async fn test_reply_with_malformed_arguments() {
        let fx = fixture();
        let uc = use_case(&fx, Arc::new(AutoRejectConfirmation));

        let reply = "```tool\n{\"name\": \"explorer\", \"arguments\": \"not json\"}\n```";
        let result = uc.execute_reply(reply).await;

        assert_eq!(result.calls.len(), 1);
        assert_eq!(result.calls[0].outcome.message(), INVALID_ARGUMENTS_MESSAGE);
        assert!(!result.all_succeeded());
        assert_eq!(fx.explorer.call_count(), 0);
    }
}
