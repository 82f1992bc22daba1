//! Fenced-block protocol between the gate and the language layer.
//!
//! The assistant requests tools with ```` ```tool ```` blocks and the gate asks
//! for approval with ```` ```confirm ```` blocks. Both carry the same JSON
//! shape:
//!
//! ````text
//! ```confirm
//! {"name":"shutdown","arguments":{"delay":60}}
//! ```
//! ````
//!
//! A `tool` block may also hold `{"tool_calls": [ ... ]}` and accepts `tool`
//! / `args` as alternative key names.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::entities::ToolArguments;

static CONFIRM_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```confirm\s*(?P<json>\{.*?\})\s*```").expect("valid confirm block regex")
});

static TOOL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```tool\s*(?P<json>\{.*?\})\s*```").expect("valid tool block regex")
});

/// Payload of a ```` ```confirm ```` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: ToolArguments,
}

impl ConfirmationRequest {
    pub fn new(name: impl Into<String>, arguments: ToolArguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Render the human-facing message with the embedded machine-readable block
    pub fn to_message(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"name":{:?},"arguments":{{}}}}"#, self.name)
        });
        format!(
            "Confirmation required before running '{}'.\n```confirm\n{}\n```",
            self.name, json
        )
    }
}

/// Find the first ```` ```confirm ```` block in `content`.
///
/// Returns the request and the content with the block removed.
pub fn extract_confirmation(content: &str) -> Option<(ConfirmationRequest, String)> {
    let captures = CONFIRM_BLOCK.captures(content)?;
    let json = captures.name("json")?.as_str();
    let request: ConfirmationRequest = serde_json::from_str(json).ok()?;
    if request.name.trim().is_empty() {
        return None;
    }
    let cleaned = CONFIRM_BLOCK.replace(content, "").trim().to_string();
    Some((request, cleaned))
}

/// A tool call lifted out of an assistant reply.
///
/// Arguments stay as raw JSON so that malformed arguments surface through
/// the dispatcher as an ordinary failed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallBlock {
    pub name: String,
    pub arguments_json: String,
}

/// Tool calls found in a reply plus the remaining prose
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub text: String,
    pub calls: Vec<ToolCallBlock>,
}

/// Extract every ```` ```tool ```` block from an assistant reply, in order.
///
/// Blocks that are not valid JSON or carry no tool name are dropped.
pub fn parse_tool_blocks(content: &str) -> ParsedReply {
    let mut calls = Vec::new();
    for captures in TOOL_BLOCK.captures_iter(content) {
        if let Some(json) = captures.name("json") {
            calls.extend(parse_block_json(json.as_str()));
        }
    }

    ParsedReply {
        text: TOOL_BLOCK.replace_all(content, "").trim().to_string(),
        calls,
    }
}

fn parse_block_json(json: &str) -> Vec<ToolCallBlock> {
    let Ok(root) = serde_json::from_str::<serde_json::Value>(json) else {
        return Vec::new();
    };

    if let Some(items) = root.get("tool_calls").and_then(|v| v.as_array()) {
        return items.iter().filter_map(parse_single_call).collect();
    }

    parse_single_call(&root).into_iter().collect()
}

fn parse_single_call(value: &serde_json::Value) -> Option<ToolCallBlock> {
    let obj = value.as_object()?;
    let name = obj
        .get("name")
        .or_else(|| obj.get("tool"))
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let arguments_json = match obj.get("arguments").or_else(|| obj.get("args")) {
        None => "{}".to_string(),
        // Some models send arguments as an encoded JSON string
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Some(ToolCallBlock {
        name: name.to_string(),
        arguments_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message_shape() {
        let request = ConfirmationRequest::new(
            "shutdown",
            ToolArguments::new().with("delay", 60),
        );
        let message = request.to_message();

        assert!(message.starts_with("Confirmation required before running 'shutdown'."));
        assert!(message.contains("```confirm\n{\"name\":\"shutdown\",\"arguments\":{\"delay\":60}}\n```"));
    }

    #[test]
    fn test_confirmation_roundtrip_through_message() {
        let request = ConfirmationRequest::new(
            "delete_file",
            ToolArguments::new().with("path", "C:\\temp\\a.txt"),
        );
        let (parsed, cleaned) = extract_confirmation(&request.to_message()).unwrap();

        assert_eq!(parsed, request);
        assert_eq!(cleaned, "Confirmation required before running 'delete_file'.");
    }

    #[test]
    fn test_extract_confirmation_missing_block() {
        assert!(extract_confirmation("nothing to confirm here").is_none());
        assert!(extract_confirmation("```confirm\n{\"arguments\":{}}\n```").is_none());
    }

    #[test]
    fn test_parse_single_tool_block() {
        let reply = "Opening it now.\n```tool\n{\"name\":\"launch\",\"arguments\":{\"target\":\"calculator\"}}\n```";
        let parsed = parse_tool_blocks(reply);

        assert_eq!(parsed.text, "Opening it now.");
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].name, "launch");
        assert_eq!(parsed.calls[0].arguments_json, r#"{"target":"calculator"}"#);
    }

    #[test]
    fn test_parse_tool_calls_array_and_alt_keys() {
        let reply = r#"```tool
{"tool_calls":[{"tool":"explorer","args":{"path":"/tmp"}},{"name":"taskmgr"}]}
```"#;
        let parsed = parse_tool_blocks(reply);

        assert_eq!(parsed.calls.len(), 2);
        assert_eq!(parsed.calls[0].name, "explorer");
        assert_eq!(parsed.calls[0].arguments_json, r#"{"path":"/tmp"}"#);
        assert_eq!(parsed.calls[1].name, "taskmgr");
        assert_eq!(parsed.calls[1].arguments_json, "{}");
    }

    #[test]
    fn test_parse_string_encoded_arguments() {
        let reply = "```tool\n{\"name\":\"launch\",\"arguments\":\"{\\\"app\\\":\\\"paint\\\"}\"}\n```";
        let parsed = parse_tool_blocks(reply);
        assert_eq!(parsed.calls[0].arguments_json, r#"{"app":"paint"}"#);
    }

    #[test]
    fn test_parse_skips_invalid_blocks() {
        let reply = "```tool\n{not json}\n```\n```tool\n{\"arguments\":{}}\n```";
        let parsed = parse_tool_blocks(reply);
        assert!(parsed.calls.is_empty());
        assert!(parsed.text.is_empty());
    }
}
