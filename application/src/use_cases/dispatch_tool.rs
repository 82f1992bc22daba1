//! Dispatch Tool use case.
//!
//! The tool-dispatch and safety gate. Every request, structured or free
//! text, passes through [`ToolDispatcher`] and always comes back as an
//! [`ExecutionOutcome`]:
//!
//! ```text
//! name ─▶ validate ─▶ (launch: resolve target) ─▶ destructive? ──yes──▶ confirmed? ──no──▶ confirm request
//!                                                     │                     │
//!                                                     no                   yes
//!                                                     ▼                     ▼
//!                                              audit "Executing tool" ◀─────┘
//!                                                     │
//!                              defender_scan ◀────────┼────────▶ registry lookup ─▶ capability
//! ```
//!
//! The dispatcher never records confirmations on its own; that is the job of
//! whoever answers the confirmation request (see [`ToolDispatcher::grant_confirmation`]).

use crate::config::DispatchParams;
use crate::ports::audit_sink::AuditSink;
use crate::ports::capability_catalog::CapabilityCatalog;
use crate::ports::confirmation_store::ConfirmationStore;
use crate::ports::malware_scanner::MalwareScanner;
use futures::FutureExt;
use serde::Serialize;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use toolgate_domain::tool::projection::{DEFENDER_SCAN, LAUNCH};
use toolgate_domain::{
    AuditEntry, CapabilityDescriptor, CapabilityError, CommandTextValidator,
    ConfirmationRequest, DestructiveOperationClassifier, ExecutionOutcome, ToolArguments,
    ToolInvocation, project_parameters, resolve_launch_target,
};
use toolgate_domain::safety::forbidden_target_char;
use tracing::{debug, info, warn};

pub const NO_TOOL_MESSAGE: &str = "No tool specified.";
pub const LAUNCH_GUIDANCE_MESSAGE: &str =
    "Tell me which app to open (for example: \"Open Calculator\" or \"Open Notepad\").";
pub const INVALID_ARGUMENTS_MESSAGE: &str = "Invalid tool arguments.";

/// Name reported when no scanner is wired in
const DEFAULT_SCANNER_NAME: &str = "Malware scanner";

/// A registered capability as seen by callers listing the gate's tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySummary {
    #[serde(flatten)]
    pub descriptor: CapabilityDescriptor,
    /// Whether the gate asks for confirmation before running it
    pub destructive: bool,
}

/// Why a guarded invocation did not produce a value
#[derive(Debug)]
enum InvocationFailure {
    Error(CapabilityError),
    Panicked,
    TimedOut(Duration),
}

/// The tool-dispatch and safety gate.
///
/// Safe to share behind an `Arc` and call concurrently. No lock is held
/// while a capability runs; the only shared state lives in the injected
/// confirmation store and audit sink.
pub struct ToolDispatcher {
    catalog: Arc<dyn CapabilityCatalog>,
    confirmations: Arc<dyn ConfirmationStore>,
    audit: Arc<dyn AuditSink>,
    scanner: Option<Arc<dyn MalwareScanner>>,
    classifier: DestructiveOperationClassifier,
    validator: CommandTextValidator,
    params: DispatchParams,
}

impl ToolDispatcher {
    pub fn new(
        catalog: Arc<dyn CapabilityCatalog>,
        confirmations: Arc<dyn ConfirmationStore>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            catalog,
            confirmations,
            audit,
            scanner: None,
            classifier: DestructiveOperationClassifier::default(),
            validator: CommandTextValidator::new(),
            params: DispatchParams::default(),
        }
    }

    /// Route `defender_scan` to this scanner
    pub fn with_scanner(mut self, scanner: Arc<dyn MalwareScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    pub fn with_classifier(mut self, classifier: DestructiveOperationClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_params(mut self, params: DispatchParams) -> Self {
        self.params = params;
        self
    }

    pub fn classifier(&self) -> &DestructiveOperationClassifier {
        &self.classifier
    }

    /// Run one structured tool invocation through the gate.
    ///
    /// Never fails and never panics: input errors, policy refusals and
    /// capability failures all come back as unsuccessful outcomes.
    pub async fn execute(&self, invocation: &ToolInvocation) -> ExecutionOutcome {
        let tool = invocation.tool_name().trim();
        if tool.is_empty() {
            return ExecutionOutcome::failed(NO_TOOL_MESSAGE);
        }
        let key = invocation.normalized_name();

        let mut arguments = invocation.arguments().clone();
        let mut gated_launch = false;
        if key == LAUNCH {
            let Some(target) = resolve_launch_target(&arguments) else {
                return ExecutionOutcome::failed(LAUNCH_GUIDANCE_MESSAGE);
            };
            if let Some(c) = forbidden_target_char(&target) {
                warn!("Launch target '{}' contains '{}'", target, c);
                self.audit.log(AuditEntry::new(format!(
                    "Rejected launch target for tool '{}'.",
                    tool
                )));
                return ExecutionOutcome::failed(format!(
                    "Launch target rejected: the character '{}' is not allowed.",
                    c
                ));
            }
            debug!("Resolved launch target: {}", target);
            gated_launch = self.classifier.launch_requires_confirmation(&target);
            arguments.insert("target", target);
        }

        // A gated launch needs a confirmed call every time; a session record
        // for `launch` covers ordinary targets only.
        let needs_confirmation = if gated_launch {
            !invocation.is_confirmed()
        } else {
            self.classifier.requires_confirmation(tool)
                && !invocation.is_confirmed()
                && !self.confirmations.is_confirmed(tool)
        };
        if needs_confirmation {
            info!("Tool '{}' requires confirmation", tool);
            let request = ConfirmationRequest::new(tool, arguments);
            return ExecutionOutcome::confirmation_required(request.to_message());
        }

        self.audit
            .log(AuditEntry::new(format!("Executing tool '{}'.", tool)));

        if key == DEFENDER_SCAN {
            return self.run_scan(tool, &arguments).await;
        }

        let Some(capability) = self.catalog.get(tool) else {
            debug!("No capability registered for '{}'", tool);
            return ExecutionOutcome::failed(format!("Unknown tool '{}'.", tool));
        };

        let parameters = project_parameters(&key, &arguments);
        debug!("Invoking '{}' with {} parameter(s)", tool, parameters.len());

        match self
            .guarded(self.params.capability_timeout, capability.execute(&parameters))
            .await
        {
            Ok(true) => ExecutionOutcome::succeeded(format!("Tool '{}' executed successfully.", tool)),
            Ok(false) => {
                warn!("Tool '{}' reported failure", tool);
                ExecutionOutcome::failed(failure_message(tool))
            }
            Err(failure) => self.failure_outcome(tool, failure),
        }
    }

    /// Decode `arguments_json` and dispatch.
    ///
    /// Blank JSON means no arguments; anything that is not a flat object of
    /// strings, numbers and booleans yields "Invalid tool arguments.".
    pub async fn execute_json(
        &self,
        tool_name: &str,
        arguments_json: &str,
        confirmed: bool,
    ) -> ExecutionOutcome {
        let arguments = match ToolArguments::from_json(arguments_json) {
            Ok(arguments) => arguments,
            Err(e) => {
                debug!("Rejecting arguments for '{}': {}", tool_name, e);
                return ExecutionOutcome::failed(INVALID_ARGUMENTS_MESSAGE);
            }
        };

        let invocation = ToolInvocation::new(tool_name)
            .with_arguments(arguments)
            .confirmed(confirmed);
        self.execute(&invocation).await
    }

    /// The free-text path.
    ///
    /// The text is screened first. If it passes, its first word names the
    /// tool and the untouched remainder becomes the `target` argument.
    pub async fn execute_command_text(&self, text: &str, confirmed: bool) -> ExecutionOutcome {
        if let Err(rejection) = self.validator.check(text) {
            warn!("Command text rejected: {}", rejection);
            self.audit.log(AuditEntry::new(format!(
                "Rejected command text: {}.",
                rejection
            )));
            return ExecutionOutcome::failed(format!(
                "Command rejected by safety policy: {}.",
                rejection
            ));
        }

        let text = text.trim();
        let (tool, rest) = match text.split_once(char::is_whitespace) {
            Some((tool, rest)) => (tool, rest.trim()),
            None => (text, ""),
        };

        let mut invocation = ToolInvocation::new(tool).confirmed(confirmed);
        if !rest.is_empty() {
            invocation = invocation.with_arg("target", rest);
        }
        self.execute(&invocation).await
    }

    /// Record a human's approval of `tool_name` for the rest of the session.
    ///
    /// Returns `true` when a new record was created.
    pub fn grant_confirmation(&self, tool_name: &str) -> bool {
        let tool = tool_name.trim();
        if tool.is_empty() {
            return false;
        }
        let created = self.confirmations.confirm(tool);
        if created {
            info!("Confirmation recorded for '{}'", tool);
            self.audit
                .log(AuditEntry::new(format!("Confirmation recorded for tool '{}'.", tool)));
        }
        created
    }

    /// Everything a caller can ask for, sorted by name
    pub fn capabilities(&self) -> Vec<CapabilitySummary> {
        let mut descriptors = self.catalog.descriptors();
        if let Some(scanner) = &self.scanner
            && !descriptors.iter().any(|d| d.name.eq_ignore_ascii_case(DEFENDER_SCAN))
        {
            descriptors.push(CapabilityDescriptor::new(
                DEFENDER_SCAN,
                format!("Run a {} scan (argument: full=true|false)", scanner.display_name()),
            ));
        }
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));

        descriptors
            .into_iter()
            .map(|descriptor| CapabilitySummary {
                destructive: self.classifier.requires_confirmation(&descriptor.name),
                descriptor,
            })
            .collect()
    }

    async fn run_scan(&self, tool: &str, arguments: &ToolArguments) -> ExecutionOutcome {
        let Some(scanner) = &self.scanner else {
            return ExecutionOutcome::failed(format!(
                "{} not available on this device.",
                DEFAULT_SCANNER_NAME
            ));
        };

        if !scanner.is_available().await {
            return ExecutionOutcome::failed(format!(
                "{} not available on this device.",
                scanner.display_name()
            ));
        }

        let full = arguments.get_bool("full").unwrap_or(false);
        info!(
            "Starting {} {} scan",
            scanner.display_name(),
            if full { "full" } else { "quick" }
        );

        match self.guarded(self.params.scan_timeout, scanner.scan(full)).await {
            Ok(report) => ExecutionOutcome::succeeded(report),
            Err(failure) => self.failure_outcome(tool, failure),
        }
    }

    /// Run a capability future with panic isolation and an optional time limit
    async fn guarded<T, F>(
        &self,
        limit: Option<Duration>,
        invocation: F,
    ) -> Result<T, InvocationFailure>
    where
        F: Future<Output = Result<T, CapabilityError>>,
    {
        let caught = AssertUnwindSafe(invocation).catch_unwind();
        let result = match limit {
            Some(limit) => tokio::time::timeout(limit, caught)
                .await
                .map_err(|_| InvocationFailure::TimedOut(limit))?,
            None => caught.await,
        };

        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(InvocationFailure::Error(e)),
            Err(_) => Err(InvocationFailure::Panicked),
        }
    }

    fn failure_outcome(&self, tool: &str, failure: InvocationFailure) -> ExecutionOutcome {
        match failure {
            InvocationFailure::Error(e) => {
                warn!("Tool '{}' failed: {}", tool, e);
                self.audit
                    .log(AuditEntry::new(format!("Tool '{}' raised an error: {}", tool, e)));
                ExecutionOutcome::failed(failure_message(tool))
            }
            InvocationFailure::Panicked => {
                warn!("Tool '{}' panicked", tool);
                self.audit
                    .log(AuditEntry::new(format!("Tool '{}' panicked.", tool)));
                ExecutionOutcome::failed(failure_message(tool))
            }
            InvocationFailure::TimedOut(limit) => {
                warn!("Tool '{}' timed out after {:?}", tool, limit);
                let message = format!("Tool '{}' timed out after {}s.", tool, limit.as_secs());
                self.audit.log(AuditEntry::new(message.clone()));
                ExecutionOutcome::failed(message)
            }
        }
    }
}

fn failure_message(tool: &str) -> String {
    format!("Tool '{}' failed to execute.", tool)
}
