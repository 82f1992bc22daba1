//! Interactive confirmation of destructive tools.
//!
//! This module provides a CLI interface for users to approve or refuse a
//! destructive tool when `HilMode::Interactive` is set.
//!
//! # User Interface
//!
//! ```text
//! ═══════════════════════════════════════════════════════════════
//!   ⚠️  Confirmation Required
//! ═══════════════════════════════════════════════════════════════
//!
//! Tool:
//!   shutdown
//!
//! Arguments:
//!   delay = 60
//!
//! Commands:
//!   /yes     - Run it and remember for this session
//!   /once    - Run it this time only
//!   /no      - Do not run it
//!
//! confirm>
//! ```
//!
//! # Commands
//!
//! | Command | Aliases | Decision |
//! |---------|---------|----------|
//! | `/yes` | `yes`, `y`, `approve`, `a` | `Approve` |
//! | `/once` | `once`, `o` | `ApproveOnce` |
//! | `/no` | `no`, `n`, `reject`, `r`, `q` | `Reject` |

use async_trait::async_trait;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;
use toolgate_application::ports::human_confirmation::{
    HumanConfirmationError, HumanConfirmationPort,
};
use toolgate_domain::core::string::truncate;
use toolgate_domain::{ConfirmationDecision, ConfirmationRequest};

/// Map one line of user input to a decision
pub fn parse_decision(input: &str) -> Option<ConfirmationDecision> {
    match input.trim().to_lowercase().as_str() {
        "/yes" | "yes" | "y" | "approve" | "a" => Some(ConfirmationDecision::Approve),
        "/once" | "once" | "o" => Some(ConfirmationDecision::ApproveOnce),
        "/no" | "no" | "n" | "reject" | "r" | "q" => Some(ConfirmationDecision::Reject),
        _ => None,
    }
}

#[cfg(windows)]
const TERMINAL_DEVICE: &str = "CONIN$";
#[cfg(not(windows))]
const TERMINAL_DEVICE: &str = "/dev/tty";

/// Interactive confirmation handler for CLI.
///
/// Implements [`HumanConfirmationPort`] with a terminal prompt on stdout.
/// Answers are read from stdin unless another input is supplied.
/// End of input counts as a refusal.
pub struct InteractiveConfirmation {
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl InteractiveConfirmation {
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }

    /// Read answers from `input` instead of stdin
    pub fn with_input(input: impl BufRead + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
        }
    }

    /// Read answers from the controlling terminal.
    ///
    /// Used when stdin already carries other data, such as an assistant
    /// reply. Fails when the process has no terminal attached.
    pub fn from_terminal() -> io::Result<Self> {
        let terminal = File::open(TERMINAL_DEVICE)?;
        Ok(Self::with_input(BufReader::new(terminal)))
    }

    fn display_prompt(&self, request: &ConfirmationRequest) {
        let rule = "═══════════════════════════════════════════════════════════════";
        println!();
        println!("{}", rule.yellow().bold());
        println!("{}", "  ⚠️  Confirmation Required".yellow().bold());
        println!("{}", rule.yellow().bold());
        println!();

        println!("{}", "Tool:".cyan().bold());
        println!("  {}", request.name.bold());
        println!();

        if !request.arguments.is_empty() {
            println!("{}", "Arguments:".cyan().bold());
            for (key, value) in request.arguments.iter() {
                println!("  {} = {}", key, truncate(&value.to_text(), 80));
            }
            println!();
        }

        println!("{}", "Commands:".cyan().bold());
        println!("  {}     - Run it and remember for this session", "/yes".green());
        println!("  {}    - Run it this time only", "/once".green());
        println!("  {}      - Do not run it", "/no".red());
        println!();
    }

    /// Read one line; `None` at end of input
    fn read_command(&self) -> Result<Option<String>, HumanConfirmationError> {
        print!("{} ", "confirm>".magenta().bold());
        io::stdout().flush().map_err(|e| {
            HumanConfirmationError::IoError(format!("Failed to flush stdout: {}", e))
        })?;

        let mut reader = self
            .input
            .lock()
            .map_err(|_| HumanConfirmationError::IoError("Input reader is poisoned".to_string()))?;
        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .map_err(|e| HumanConfirmationError::IoError(format!("Failed to read input: {}", e)))?;

        Ok((read > 0).then(|| input.trim().to_string()))
    }
}

impl Default for InteractiveConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HumanConfirmationPort for InteractiveConfirmation {
    async fn request_confirmation(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationDecision, HumanConfirmationError> {
        self.display_prompt(request);

        loop {
            let Some(input) = self.read_command()? else {
                println!();
                return Ok(ConfirmationDecision::Reject);
            };

            if input.is_empty() {
                continue;
            }

            match parse_decision(&input) {
                Some(decision) => {
                    println!();
                    if decision.is_approved() {
                        println!("{}", "✓ Approved".green());
                    } else {
                        println!("{}", "✗ Refused".red());
                    }
                    return Ok(decision);
                }
                None => {
                    println!();
                    println!("{} Unknown command: {}", "⚠️".yellow(), input.red());
                    println!("Available commands: /yes, /once, /no");
                    println!();
                }
            }
        }
    }
}
