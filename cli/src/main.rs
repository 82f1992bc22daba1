//! CLI entrypoint for toolgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use toolgate_application::{
    AuditSink, AutoApproveConfirmation, AutoRejectConfirmation, ConfirmAndDispatchUseCase,
    HumanConfirmationPort, NoAuditSink, ToolDispatcher,
};
use toolgate_domain::{CommandTextValidator, HilMode};
use toolgate_infrastructure::{
    AUDIT_TARGET, ConfigLoader, FanoutAuditSink, FileConfig, InMemoryConfirmationStore,
    JsonlAuditSink, TracingAuditSink, default_registry, platform_scanner,
};
use toolgate_presentation::{Cli, Command, ConsoleFormatter, InteractiveConfirmation, OutputFormat};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, config.logging.resolved_file().as_deref());

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    info!("Starting toolgate");

    // Output
    let format = cli
        .output
        .or_else(|| config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    if !config.output.color {
        colored::control::set_override(false);
    }
    let formatter = ConsoleFormatter::new(format);

    // The screen needs nothing else wired in
    if let Command::Check { text } = &command {
        let verdict = CommandTextValidator::new().check(text);
        println!("{}", formatter.check(text, &verdict));
        return Ok(exit_code(verdict.is_ok()));
    }

    // === Dependency Injection ===
    let confirmation = build_confirmation(&cli, &config, reads_stdin(&command))?;
    let use_case = build_use_case(&config, confirmation);

    let succeeded = match command {
        Command::Run { tool, args } => {
            let outcome = use_case.execute_json(&tool, &args).await;
            println!("{}", formatter.outcome(&outcome));
            outcome.is_success()
        }
        Command::Exec { text } => {
            let outcome = use_case.execute_command_text(&text).await;
            println!("{}", formatter.outcome(&outcome));
            outcome.is_success()
        }
        Command::Reply => {
            let mut reply = String::new();
            tokio::io::stdin()
                .read_to_string(&mut reply)
                .await
                .context("Failed to read reply from stdin")?;
            let result = use_case.execute_reply(&reply).await;
            println!("{}", formatter.reply(&result));
            result.all_succeeded()
        }
        Command::Tools => {
            println!("{}", formatter.capabilities(&use_case.dispatcher().capabilities()));
            true
        }
        Command::Check { .. } => true,
    };

    Ok(exit_code(succeeded))
}

/// Initialize logging based on verbosity level and the optional log file
fn init_logging(verbose: u8, file: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}=info", level, AUDIT_TARGET)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file.and_then(log_file_writer) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn log_file_writer(path: &Path) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let name = path.file_name()?;
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, name);
    Some(tracing_appender::non_blocking(appender))
}

/// Commands that consume stdin as input
fn reads_stdin(command: &Command) -> bool {
    matches!(command, Command::Reply)
}

fn build_confirmation(
    cli: &Cli,
    config: &FileConfig,
    stdin_taken: bool,
) -> Result<Arc<dyn HumanConfirmationPort>> {
    if cli.yes {
        return Ok(Arc::new(AutoApproveConfirmation));
    }

    let (hil_mode, _) = config.safety.parse_hil_mode();
    Ok(match hil_mode {
        HilMode::Interactive if stdin_taken => match InteractiveConfirmation::from_terminal() {
            Ok(prompt) => Arc::new(prompt),
            Err(e) => bail!(
                "Interactive confirmation needs a terminal while the reply is read from stdin ({}). \
                 Pass --yes or set safety.hil_mode to \"auto_approve\" or \"auto_reject\".",
                e
            ),
        },
        HilMode::Interactive => Arc::new(InteractiveConfirmation::new()),
        HilMode::AutoApprove => Arc::new(AutoApproveConfirmation),
        HilMode::AutoReject => Arc::new(AutoRejectConfirmation),
    })
}

fn build_use_case(
    config: &FileConfig,
    confirmation: Arc<dyn HumanConfirmationPort>,
) -> ConfirmAndDispatchUseCase {
    let store = Arc::new(
        InMemoryConfirmationStore::new().with_ttl_secs(config.safety.confirmation_ttl_secs),
    );

    let dispatcher = ToolDispatcher::new(Arc::new(default_registry()), store, build_audit(config))
        .with_scanner(platform_scanner())
        .with_classifier(config.safety.to_classifier())
        .with_params(config.dispatch.to_params());

    ConfirmAndDispatchUseCase::new(Arc::new(dispatcher), confirmation)
}

fn build_audit(config: &FileConfig) -> Arc<dyn AuditSink> {
    if !config.audit.enabled {
        return Arc::new(NoAuditSink);
    }

    let mut sink = FanoutAuditSink::new().with_sink(Arc::new(TracingAuditSink));
    if let Some(path) = config.audit.resolved_path() {
        match JsonlAuditSink::open(&path) {
            Some(jsonl) => sink = sink.with_sink(Arc::new(jsonl)),
            None => warn!("Audit file {} unavailable, logging audit to tracing only", path.display()),
        }
    }
    Arc::new(sink)
}

fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
