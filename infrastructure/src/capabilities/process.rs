//! OS process helpers shared by the capabilities.

use std::process::Stdio;
use toolgate_domain::CapabilityError;
use tracing::debug;

/// A program plus its arguments, built before anything is spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ProgramInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Start the program and return without waiting for it to exit.
    ///
    /// `Ok(true)` once the OS accepted the process. The process outlives the
    /// call.
    pub fn spawn(&self) -> Result<bool, CapabilityError> {
        let child = self
            .command()
            .kill_on_drop(false)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(program = %self.program, pid = ?child.id(), "Spawned process");
        Ok(true)
    }

    /// Run to completion; `Ok(true)` when the exit status is success.
    ///
    /// Dropping the future (e.g. on timeout) kills the process.
    pub async fn status(&self) -> Result<bool, CapabilityError> {
        let status = self
            .command()
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        debug!(program = %self.program, code = ?status.code(), "Process exited");
        Ok(status.success())
    }

    /// Run to completion and capture stdout
    pub async fn output(&self) -> Result<(bool, String), CapabilityError> {
        let output = self.command().stderr(Stdio::null()).output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((output.status.success(), stdout))
    }

    fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }
}

impl std::fmt::Display for ProgramInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Hand `target` to the desktop's default handler (file, URL, URI scheme or app).
///
/// On Windows this goes through `ShellExecute` via `rundll32`, never `cmd`.
pub fn shell_open(target: &str) -> ProgramInvocation {
    if cfg!(target_os = "windows") {
        ProgramInvocation::new("rundll32")
            .arg("url.dll,FileProtocolHandler")
            .arg(target)
    } else if cfg!(target_os = "macos") {
        ProgramInvocation::new("open").arg(target)
    } else {
        ProgramInvocation::new("xdg-open").arg(target)
    }
}
