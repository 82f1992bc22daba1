//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for dispatch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON document per result
    Json,
}

impl From<toolgate_domain::OutputFormat> for OutputFormat {
    fn from(format: toolgate_domain::OutputFormat) -> Self {
        match format {
            toolgate_domain::OutputFormat::Text => OutputFormat::Text,
            toolgate_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for toolgate
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(author, version, about = "Safety gate for assistant-triggered host operations")]
#[command(long_about = r#"
toolgate runs privileged host operations (launch a program, open the file
browser, scan for malware, shut down) on behalf of an assistant, behind a
safety gate:

1. Tool names are resolved to registered capabilities
2. Destructive tools (shutdown, delete_file, ...) need human confirmation
3. Every tool that runs is written to the audit trail

Configuration files are loaded from (in priority order):
1. TOOLGATE_* environment variables
2. --config <path>     Explicit config file
3. ./toolgate.toml     Project-level config
4. ~/.config/toolgate/config.toml   Global config

Example:
  toolgate run launch --args '{"target": "Open the Calculator app."}'
  toolgate run shutdown --args '{"delay": 300}'
  toolgate exec "launch notepad"
  echo '```tool {"name":"explorer"} ```' | toolgate reply
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Approve every confirmation request without asking
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch one tool with JSON arguments
    Run {
        /// Tool name (e.g. launch, explorer, shutdown, defender_scan)
        tool: String,

        /// Arguments as a JSON object
        #[arg(short, long, value_name = "JSON", default_value = "")]
        args: String,
    },

    /// Screen free text, then dispatch its first word as the tool
    Exec {
        /// Command text, e.g. "launch notepad"
        text: String,
    },

    /// Only run the command text screen and report the verdict
    Check {
        text: String,
    },

    /// Read an assistant reply on stdin and dispatch its tool blocks
    Reply,

    /// List registered tools
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from([
            "toolgate",
            "run",
            "launch",
            "--args",
            r#"{"target":"calc"}"#,
            "-o",
            "json",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Run {
                tool: "launch".to_string(),
                args: r#"{"target":"calc"}"#.to_string(),
            })
        );
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(!cli.yes);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["toolgate", "exec", "launch notepad", "--yes", "-vv"]);
        assert_eq!(
            cli.command,
            Some(Command::Exec {
                text: "launch notepad".to_string()
            })
        );
        assert!(cli.yes);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::parse_from(["toolgate", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_args_default_to_empty() {
        let cli = Cli::parse_from(["toolgate", "run", "explorer"]);
        assert_eq!(
            cli.command,
            Some(Command::Run {
                tool: "explorer".to_string(),
                args: String::new(),
            })
        );
    }
}
