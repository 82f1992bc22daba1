//! Destructive operation classifier.
//!
//! Membership in this set is the only thing that decides whether a tool needs
//! human confirmation. It is never inferred from capability metadata; a new
//! destructive capability has to be added here (or through configuration).

use std::collections::BTreeSet;

/// Tools that are irreversible or security-sensitive
pub const DEFAULT_DESTRUCTIVE_TOOLS: &[&str] = &[
    "shutdown",
    "delete_file",
    "kill_process",
    "registry_write",
    "firewall_rule",
];

/// Programs that power off, restart or log off the host when started bare.
///
/// `launch` asks for confirmation before starting any of them.
pub const POWER_PROGRAMS: &[&str] = &[
    "shutdown",
    "poweroff",
    "reboot",
    "halt",
    "init",
    "telinit",
    "systemctl",
    "loginctl",
    "logoff",
    "logout",
    "restart",
];

/// Whether `target` names one of [`POWER_PROGRAMS`].
///
/// Directories and a trailing `.exe` are ignored, so `/usr/sbin/reboot` and
/// `C:\Windows\System32\shutdown.exe` both count.
pub fn is_power_program(target: &str) -> bool {
    let program = program_name(target);
    POWER_PROGRAMS.iter().any(|p| *p == program)
}

fn program_name(target: &str) -> String {
    let base = target
        .trim()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match base.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => base,
    }
}

/// Case-insensitive set of destructive tool names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructiveOperationClassifier {
    tools: BTreeSet<String>,
}

impl Default for DestructiveOperationClassifier {
    fn default() -> Self {
        Self {
            tools: DEFAULT_DESTRUCTIVE_TOOLS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl DestructiveOperationClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool to the destructive set (builder pattern)
    pub fn with_tool(mut self, tool_name: impl AsRef<str>) -> Self {
        let name = normalize(tool_name.as_ref());
        if !name.is_empty() {
            self.tools.insert(name);
        }
        self
    }

    /// Add several tools at once (builder pattern)
    pub fn with_tools<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(self, |c, n| c.with_tool(n))
    }

    pub fn requires_confirmation(&self, tool_name: &str) -> bool {
        self.tools.contains(&normalize(tool_name))
    }

    /// Whether starting `target` through `launch` needs confirmation.
    ///
    /// Power programs always do, as does a program named like a destructive
    /// tool.
    pub fn launch_requires_confirmation(&self, target: &str) -> bool {
        is_power_program(target) || self.tools.contains(&program_name(target))
    }

    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|s| s.as_str())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let classifier = DestructiveOperationClassifier::new();
        for tool in DEFAULT_DESTRUCTIVE_TOOLS {
            assert!(classifier.requires_confirmation(tool));
        }
        assert_eq!(classifier.tools().count(), 5);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = DestructiveOperationClassifier::new();
        assert!(classifier.requires_confirmation("SHUTDOWN"));
        assert!(classifier.requires_confirmation("Delete_File"));
    }

    #[test]
    fn test_non_destructive_tools() {
        let classifier = DestructiveOperationClassifier::new();
        for tool in ["launch", "explorer", "calculator", "taskmgr", "defender_scan", ""] {
            assert!(!classifier.requires_confirmation(tool));
        }
    }

    #[test]
    fn test_power_programs_need_confirmation_through_launch() {
        let classifier = DestructiveOperationClassifier::new();
        for target in ["shutdown", "Poweroff", "/usr/sbin/reboot", "C:\\Windows\\System32\\shutdown.exe", " halt "] {
            assert!(classifier.launch_requires_confirmation(target), "{target}");
        }
        for target in ["calc", "notepad", "rebooter", "ms-settings:", ""] {
            assert!(!classifier.launch_requires_confirmation(target), "{target}");
        }
    }

    #[test]
    fn test_launch_of_configured_destructive_name_needs_confirmation() {
        let classifier = DestructiveOperationClassifier::new().with_tool("wipe_disk");
        assert!(classifier.launch_requires_confirmation("wipe_disk.exe"));
        assert!(classifier.launch_requires_confirmation("kill_process"));
    }

    #[test]
    fn test_with_tools_extends_set() {
        let classifier = DestructiveOperationClassifier::new().with_tools(["Format_Disk", " "]);
        assert!(classifier.requires_confirmation("format_disk"));
        assert_eq!(classifier.tools().count(), 6);
    }
}
