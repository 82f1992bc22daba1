//! Console output formatter for dispatch results

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use serde_json::json;
use toolgate_application::{CapabilitySummary, ReplyOutcome};
use toolgate_domain::{CommandRejection, ExecutionOutcome};

/// Formats dispatch results for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format one execution outcome
    pub fn outcome(&self, outcome: &ExecutionOutcome) -> String {
        match self.format {
            OutputFormat::Json => to_json(outcome),
            OutputFormat::Text => Self::outcome_text(outcome),
        }
    }

    /// Format the listing of registered tools
    pub fn capabilities(&self, capabilities: &[CapabilitySummary]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(&capabilities);
        }

        let width = capabilities
            .iter()
            .map(|c| c.descriptor.name.len())
            .max()
            .unwrap_or(0);

        let mut output = format!("{}\n", "Available tools:".cyan().bold());
        for capability in capabilities {
            let name = format!("{:<width$}", capability.descriptor.name, width = width);
            let mut line = format!("  {}  {}", name.bold(), capability.descriptor.description);
            if capability.destructive {
                line.push_str(&format!(" {}", "[confirm]".yellow()));
            }
            if capability.descriptor.requires_elevation {
                line.push_str(&format!(" {}", "[admin]".red()));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Format the verdict of the command text screen
    pub fn check(&self, text: &str, verdict: &Result<(), CommandRejection>) -> String {
        match self.format {
            OutputFormat::Json => to_json(&json!({
                "command": text,
                "allowed": verdict.is_ok(),
                "reason": verdict.as_ref().err().map(|r| r.to_string()),
            })),
            OutputFormat::Text => match verdict {
                Ok(()) => format!("{} command passes the safety screen", "✓".green()),
                Err(rejection) => format!("{} {}", "✗".red(), rejection.to_string().red()),
            },
        }
    }

    /// Format the results of every tool block in a reply
    pub fn reply(&self, reply: &ReplyOutcome) -> String {
        if self.format == OutputFormat::Json {
            let calls: Vec<_> = reply
                .calls
                .iter()
                .map(|c| {
                    json!({
                        "tool": c.call.name,
                        "outcome": c.outcome,
                    })
                })
                .collect();
            return to_json(&json!({ "text": reply.text, "calls": calls }));
        }

        if reply.calls.is_empty() {
            return format!("{}", "No tool blocks found in reply.".dimmed());
        }

        let mut output = String::new();
        for (i, dispatched) in reply.calls.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("[{}] {}", i + 1, dispatched.call.name).cyan().bold(),
                Self::outcome_text(&dispatched.outcome)
            ));
        }
        output
    }

    fn outcome_text(outcome: &ExecutionOutcome) -> String {
        if outcome.is_success() {
            format!("{} {}", "✓".green(), outcome.message())
        } else if outcome.requires_confirmation() {
            format!("{} {}", "?".yellow().bold(), outcome.message())
        } else {
            format!("{} {}", "✗".red(), outcome.message().red())
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
