//! Tool domain entities

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::error::DomainError;

/// A single argument value supplied with a tool invocation.
///
/// The language layer produces JSON, so the accepted kinds mirror the JSON
/// scalars. Arrays and objects are not valid tool arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArgument {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl ToolArgument {
    /// Render the argument as plain text (used for positional parameters)
    pub fn to_text(&self) -> String {
        match self {
            ToolArgument::Flag(b) => b.to_string(),
            ToolArgument::Number(n) => n.to_string(),
            ToolArgument::Text(s) => s.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolArgument::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the argument as a boolean.
    ///
    /// Accepts real booleans and the strings `true`/`false` in any case.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ToolArgument::Flag(b) => Some(*b),
            ToolArgument::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            ToolArgument::Number(_) => None,
        }
    }
}

impl From<&str> for ToolArgument {
    fn from(value: &str) -> Self {
        ToolArgument::Text(value.to_string())
    }
}

impl From<String> for ToolArgument {
    fn from(value: String) -> Self {
        ToolArgument::Text(value)
    }
}

impl From<bool> for ToolArgument {
    fn from(value: bool) -> Self {
        ToolArgument::Flag(value)
    }
}

impl From<i64> for ToolArgument {
    fn from(value: i64) -> Self {
        ToolArgument::Number(value.into())
    }
}

impl From<i32> for ToolArgument {
    fn from(value: i32) -> Self {
        ToolArgument::Number(value.into())
    }
}

impl From<u64> for ToolArgument {
    fn from(value: u64) -> Self {
        ToolArgument::Number(value.into())
    }
}

impl fmt::Display for ToolArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Insertion-ordered map of argument name → value.
///
/// Keys are matched exactly. Inserting an existing key replaces its value
/// in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    entries: Vec<(String, ToolArgument)>,
}

impl ToolArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode arguments from a JSON object.
    ///
    /// Blank input yields an empty map. A `null` value keeps its key with
    /// empty text, so it still counts as present.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(json).map_err(|e| DomainError::InvalidArguments(e.to_string()))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ToolArgument>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ToolArgument>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ToolArgument> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ToolArgument::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolArgument)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to a compact JSON object, preserving insertion order
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for ToolArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ToolArguments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArgumentsVisitor;

        impl<'de> Visitor<'de> for ArgumentsVisitor {
            type Value = ToolArguments;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of string, number or boolean arguments")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut args = ToolArguments::new();
                while let Some(key) = access.next_key::<String>()? {
                    let value = access.next_value::<Option<ToolArgument>>()?;
                    args.insert(key, value.unwrap_or_else(|| ToolArgument::Text(String::new())));
                }
                Ok(args)
            }
        }

        deserializer.deserialize_map(ArgumentsVisitor)
    }
}

/// A request to run one tool.
///
/// Built once by the caller and never mutated afterwards; the dispatcher
/// derives new argument maps instead of editing this one.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    tool_name: String,
    arguments: ToolArguments,
    confirmed: bool,
}

impl ToolInvocation {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: ToolArguments::new(),
            confirmed: false,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<ToolArgument>) -> Self {
        self.arguments.insert(key, value);
        self
    }

    pub fn with_arguments(mut self, arguments: ToolArguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Mark the invocation as explicitly confirmed by a human
    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn arguments(&self) -> &ToolArguments {
        &self.arguments
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Tool name normalized for case-insensitive lookups
    pub fn normalized_name(&self) -> String {
        self.tool_name.trim().to_ascii_lowercase()
    }
}

/// Metadata describing a registered capability.
///
/// `requires_elevation` is informational: enforcing OS elevation is the
/// capability's own business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    pub name: String,
    pub description: String,
    pub requires_elevation: bool,
}

impl CapabilityDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            requires_elevation: false,
        }
    }

    pub fn elevated(mut self) -> Self {
        self.requires_elevation = true;
        self
    }
}
