//! Named arguments → positional capability parameters

use super::entities::ToolArguments;

pub const LAUNCH: &str = "launch";
pub const EXPLORER: &str = "explorer";
pub const SHUTDOWN: &str = "shutdown";
pub const DEFENDER_SCAN: &str = "defender_scan";

/// Project named arguments into the parameter list a capability expects.
///
/// | Tool | Parameters |
/// |------|------------|
/// | `launch` | `[target]` |
/// | `explorer` | `[path]` when given |
/// | `shutdown` | `[delay]` when given |
/// | anything else | `[]` |
pub fn project_parameters(tool_name: &str, args: &ToolArguments) -> Vec<String> {
    let single = |key: &str| -> Vec<String> {
        args.get(key)
            .map(|v| v.to_text())
            .filter(|s| !s.trim().is_empty())
            .into_iter()
            .collect()
    };

    match tool_name.trim().to_ascii_lowercase().as_str() {
        LAUNCH => vec![args.get("target").map(|v| v.to_text()).unwrap_or_default()],
        EXPLORER => single("path"),
        SHUTDOWN => single("delay"),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_takes_target() {
        let args = ToolArguments::new().with("target", "calc").with("extra", 1);
        assert_eq!(project_parameters("launch", &args), vec!["calc"]);
        assert_eq!(project_parameters("LAUNCH", &args), vec!["calc"]);
    }

    #[test]
    fn test_explorer_path_is_optional() {
        let with_path = ToolArguments::new().with("path", "/home/user");
        assert_eq!(project_parameters("explorer", &with_path), vec!["/home/user"]);
        assert!(project_parameters("explorer", &ToolArguments::new()).is_empty());
        assert!(project_parameters("explorer", &ToolArguments::new().with("path", "  ")).is_empty());
    }

    #[test]
    fn test_shutdown_delay_is_stringified() {
        let args = ToolArguments::new().with("delay", 30);
        assert_eq!(project_parameters("shutdown", &args), vec!["30"]);
    }

    #[test]
    fn test_other_tools_take_nothing() {
        let args = ToolArguments::new().with("target", "ignored");
        assert!(project_parameters("calculator", &args).is_empty());
        assert!(project_parameters("taskmgr", &args).is_empty());
    }
}
