//! Safety screen for raw command text.
//!
//! Used only on the free-text path, before any capability lookup. Structured
//! tool invocations go through the destructive-tool classifier and the
//! confirmation gate instead.

use regex::RegexSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest accepted command, in characters
pub const MAX_COMMAND_CHARS: usize = 500;

/// Dangerous patterns (label, regex). Matched case-insensitively.
const DANGEROUS_PATTERNS: &[(&str, &str)] = &[
    ("recursive delete", r"rm -rf"),
    ("drive format", r"format\s+[a-z]:"),
    ("delete with switches", r"del\s+/[a-z]"),
    ("remove directory with switches", r"rd\s+/[a-z]"),
    ("system shutdown", r"shutdown"),
    ("process kill", r"taskkill"),
    ("user management", r"net user"),
    ("group management", r"net localgroup"),
    ("registry delete", r"reg delete"),
    ("registry add", r"reg add"),
    ("encoded powershell", r"powershell -e"),
    ("command shell", r"cmd.exe"),
    ("script host", r"wscript"),
    ("script host", r"cscript"),
];

const INJECTION_CHARS: &[char] = &[';', '|', '&'];

static DANGEROUS_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(DANGEROUS_PATTERNS.iter().map(|(_, p)| format!("(?i){p}")))
        .expect("valid dangerous pattern set")
});

/// Why a command was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandRejection {
    #[error("command is empty")]
    Empty,

    #[error("command is too long ({0} characters, limit {MAX_COMMAND_CHARS})")]
    TooLong(usize),

    #[error("command matches a dangerous pattern ({0})")]
    DangerousPattern(&'static str),

    #[error("command contains the injection character '{0}'")]
    InjectionCharacter(char),
}

/// Stateless screen for free-text commands
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandTextValidator;

impl CommandTextValidator {
    pub fn new() -> Self {
        Self
    }

    /// `true` only when every check passes
    pub fn validate(&self, command: &str) -> bool {
        self.check(command).is_ok()
    }

    /// Run the checks in order and report the first one that fails
    pub fn check(&self, command: &str) -> Result<(), CommandRejection> {
        if command.trim().is_empty() {
            return Err(CommandRejection::Empty);
        }

        let len = command.chars().count();
        if len > MAX_COMMAND_CHARS {
            return Err(CommandRejection::TooLong(len));
        }

        if let Some(index) = DANGEROUS_SET.matches(command).iter().next() {
            return Err(CommandRejection::DangerousPattern(DANGEROUS_PATTERNS[index].0));
        }

        if let Some(c) = command.chars().find(|c| INJECTION_CHARS.contains(c)) {
            return Err(CommandRejection::InjectionCharacter(c));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_command() {
        let validator = CommandTextValidator::new();
        assert!(validator.validate("open notepad"));
        assert!(validator.validate("launch Task Manager"));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let validator = CommandTextValidator::new();
        assert_eq!(validator.check(""), Err(CommandRejection::Empty));
        assert_eq!(validator.check(" \t\n"), Err(CommandRejection::Empty));
    }

    #[test]
    fn test_length_limit() {
        let validator = CommandTextValidator::new();
        assert!(validator.validate(&"a".repeat(500)));
        assert_eq!(validator.check(&"a".repeat(501)), Err(CommandRejection::TooLong(501)));
        assert!(!validator.validate(&"a".repeat(2000)));
    }

    #[test]
    fn test_length_counts_characters() {
        let validator = CommandTextValidator::new();
        // 500 two-byte characters are still within the limit
        assert!(validator.validate(&"é".repeat(500)));
    }

    #[test]
    fn test_rejects_shutdown() {
        let validator = CommandTextValidator::new();
        assert_eq!(
            validator.check("shutdown /s"),
            Err(CommandRejection::DangerousPattern("system shutdown"))
        );
        assert!(!validator.validate("SHUTDOWN now"));
    }

    #[test]
    fn test_rejects_dangerous_patterns_case_insensitive() {
        let validator = CommandTextValidator::new();
        for cmd in [
            "RM -RF /home",
            "format C:",
            "del /q file.txt",
            "rd /s folder",
            "taskkill /im explorer.exe",
            "net user bob secret /add",
            "net localgroup administrators bob /add",
            "reg delete HKLM\\Software\\x",
            "reg add HKCU\\Run",
            "powershell -e ZQBjAGgAbwA=",
            "CMD.EXE /c dir",
            "wscript evil.vbs",
            "cscript evil.js",
        ] {
            assert!(!validator.validate(cmd), "expected rejection: {cmd}");
        }
    }

    #[test]
    fn test_dangerous_pattern_checked_before_injection() {
        let validator = CommandTextValidator::new();
        assert_eq!(
            validator.check("a; rm -rf /"),
            Err(CommandRejection::DangerousPattern("recursive delete"))
        );
    }

    #[test]
    fn test_rejects_injection_characters() {
        let validator = CommandTextValidator::new();
        assert_eq!(
            validator.check("open notepad; open calc"),
            Err(CommandRejection::InjectionCharacter(';'))
        );
        assert!(!validator.validate("echo hi | more"));
        assert!(!validator.validate("start paint & exit"));
    }

    #[test]
    fn test_cmd_pattern_dot_matches_any_character() {
        let validator = CommandTextValidator::new();
        let shell = Err(CommandRejection::DangerousPattern("command shell"));
        assert_eq!(validator.check("launch CMD.EXE"), shell);
        assert_eq!(validator.check("launch cmdxexe"), shell);
        assert!(validator.validate("launch cmd"));
    }
}
