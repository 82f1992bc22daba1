//! Launch target resolution.
//!
//! Normalizes whatever the language layer put in a `launch` call into the
//! canonical target the launch capability expects. The steps run in a fixed
//! order: verbs, then articles, then suffixes, then aliases. That is what makes
//! `"Open the Calculator app."` come out as `calc`.

use crate::tool::entities::ToolArguments;

/// Argument keys consulted for the target, first present key wins
pub const TARGET_KEYS: &[&str] = &["target", "app", "application", "name"];

/// Moniker the launch capability maps to the system settings panel
pub const SETTINGS_MONIKER: &str = "ms-settings:";

/// Characters a launch target may never contain; a shell would read them
/// as operators, quoting or variable expansion
pub const FORBIDDEN_TARGET_CHARS: &[char] = &['&', '|', '<', '>', '^', '"', '%', ';', '`', '$'];

const VERBS: &[&str] = &["open ", "launch ", "start ", "run "];
const ARTICLE: &str = "the ";
const SUFFIXES: &[&str] = &[" app", " application"];
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

const ALIASES: &[(&str, &str)] = &[
    ("calculator", "calc"),
    ("task manager", "taskmgr"),
    ("file explorer", "explorer"),
    ("explorer", "explorer"),
    ("settings", SETTINGS_MONIKER),
];

/// Resolve the canonical launch target from invocation arguments.
///
/// Returns `None` when no target key is present or the value normalizes to
/// an empty string.
pub fn resolve_launch_target(args: &ToolArguments) -> Option<String> {
    let raw = TARGET_KEYS
        .iter()
        .find_map(|key| args.get(key))?
        .to_text();
    normalize_target(&raw)
}

/// Apply the normalization steps to a raw target string
pub fn normalize_target(raw: &str) -> Option<String> {
    let mut target = raw.trim();
    target = strip_quotes(target).trim();
    target = target.trim_end_matches(TRAILING_PUNCTUATION).trim();

    if let Some(rest) = VERBS.iter().find_map(|v| strip_prefix_ignore_case(target, v)) {
        target = rest.trim();
    }

    if let Some(rest) = strip_prefix_ignore_case(target, ARTICLE) {
        target = rest.trim();
    }

    if let Some(rest) = SUFFIXES.iter().find_map(|s| strip_suffix_ignore_case(target, s)) {
        target = rest.trim();
    }

    if target.is_empty() {
        return None;
    }

    let resolved = ALIASES
        .iter()
        .find(|(alias, _)| target.eq_ignore_ascii_case(alias))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| target.to_string());
    Some(resolved)
}

/// First character of `target` listed in [`FORBIDDEN_TARGET_CHARS`]
pub fn forbidden_target_char(target: &str) -> Option<char> {
    target.chars().find(|c| FORBIDDEN_TARGET_CHARS.contains(c))
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(raw: &str) -> Option<String> {
        resolve_launch_target(&ToolArguments::new().with("target", raw))
    }

    #[test]
    fn test_full_sentence_resolves_to_alias() {
        assert_eq!(target("Open the Calculator app."), Some("calc".to_string()));
        assert_eq!(target("launch Task Manager"), Some("taskmgr".to_string()));
    }

    #[test]
    fn test_canonical_input_is_stable() {
        assert_eq!(target("calc"), Some("calc".to_string()));
        assert_eq!(target("taskmgr"), Some("taskmgr".to_string()));
        assert_eq!(target("notepad"), Some("notepad".to_string()));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(target("File Explorer"), Some("explorer".to_string()));
        assert_eq!(target("explorer"), Some("explorer".to_string()));
        assert_eq!(target("start settings"), Some(SETTINGS_MONIKER.to_string()));
    }

    #[test]
    fn test_quotes_and_punctuation() {
        assert_eq!(target("\"Notepad\""), Some("Notepad".to_string()));
        assert_eq!(target("'paint'"), Some("paint".to_string()));
        assert_eq!(target("Paint!?"), Some("Paint".to_string()));
        assert_eq!(target("\"open notepad.\""), Some("notepad".to_string()));
        assert_eq!(target("  run   the   spotify application  "), Some("spotify".to_string()));
    }

    #[test]
    fn test_only_one_verb_is_stripped() {
        assert_eq!(target("open run notepad"), Some("run notepad".to_string()));
    }

    #[test]
    fn test_verb_must_be_a_prefix() {
        assert_eq!(target("reopen notes"), Some("reopen notes".to_string()));
        assert_eq!(target("opener"), Some("opener".to_string()));
    }

    #[test]
    fn test_empty_results_are_none() {
        assert_eq!(target(""), None);
        assert_eq!(target("   "), None);
        assert_eq!(target("\"\""), None);
        assert_eq!(target("..."), None);
        assert_eq!(target("open the app"), Some("app".to_string()));
    }

    #[test]
    fn test_key_precedence() {
        let args = ToolArguments::new()
            .with("name", "paint")
            .with("app", "calculator");
        assert_eq!(resolve_launch_target(&args), Some("calc".to_string()));

        let args = ToolArguments::new().with("application", "notepad");
        assert_eq!(resolve_launch_target(&args), Some("notepad".to_string()));
    }

    #[test]
    fn test_first_present_key_wins_even_when_blank() {
        let args = ToolArguments::new().with("target", " ").with("app", "calculator");
        assert_eq!(resolve_launch_target(&args), None);
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(resolve_launch_target(&ToolArguments::new()), None);
        let args = ToolArguments::new().with("path", "/tmp");
        assert_eq!(resolve_launch_target(&args), None);
    }

    #[test]
    fn test_forbidden_target_chars() {
        assert_eq!(forbidden_target_char("calc&shutdown/s/t0"), Some('&'));
        assert_eq!(forbidden_target_char("note\"pad"), Some('"'));
        assert_eq!(forbidden_target_char("%COMSPEC%"), Some('%'));
        assert_eq!(forbidden_target_char("a^b"), Some('^'));
        assert_eq!(forbidden_target_char("C:\\Program Files\\app.exe"), None);
        assert_eq!(forbidden_target_char("ms-settings:"), None);
    }

    #[test]
    fn test_non_ascii_target_is_safe() {
        assert_eq!(target("öffne"), Some("öffne".to_string()));
        assert_eq!(target("é"), Some("é".to_string()));
    }
}
