//! Chat message records fed to the renderer.
//!
//! JSON uses camelCase keys (`toolCalls`, `toolName`, `isStreaming`); the
//! snake_case spellings are accepted too.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RenderError;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "system" => Ok(Role::System),
            other => Err(RenderError::UnknownRole(other.to_string())),
        }
    }
}

/// One tool invocation attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    #[serde(alias = "tool_name")]
    pub tool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: None,
            result: None,
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<Value>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Number of named arguments (0 when absent).
    pub fn argument_count(&self) -> usize {
        self.arguments.as_ref().map_or(0, Map::len)
    }
}

/// Token counts reported for a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt: u64,
    pub completion: u64,
    pub total: u64,
}

impl TokenUsage {
    /// Counts as given; `total` is not recomputed.
    pub fn new(prompt: u64, completion: u64, total: u64) -> Self {
        Self {
            prompt,
            completion,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, alias = "tool_calls", skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenUsage>,
    #[serde(default, alias = "is_streaming")]
    pub is_streaming: bool,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
            tool_calls: None,
            tokens: None,
            is_streaming: false,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_tool_call(mut self, call: ToolCall) -> Self {
        self.tool_calls.get_or_insert_with(Vec::new).push(call);
        self
    }

    pub fn with_tokens(mut self, tokens: TokenUsage) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn streaming(mut self, is_streaming: bool) -> Self {
        self.is_streaming = is_streaming;
        self
    }

    /// Parse a message from JSON. Unknown roles are rejected here.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(json)?;
        if let Some(role) = value.get("role").and_then(Value::as_str) {
            role.parse::<Role>()?;
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json() {
        let msg = ChatMessage::from_json(
            r#"{
                "role": "assistant",
                "content": "done",
                "timestamp": "2024-05-01T10:32:00Z",
                "toolCalls": [{"toolName": "search", "arguments": {"q": "x"}, "result": [1, 2]}],
                "tokens": {"prompt": 3, "completion": 2, "total": 5},
                "isStreaming": true
            }"#,
        )
        .unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_streaming);
        assert!(msg.timestamp.is_some());
        let calls = msg.tool_calls.unwrap();
        assert_eq!(calls[0].tool_name, "search");
        assert_eq!(calls[0].argument_count(), 1);
        assert_eq!(msg.tokens, Some(TokenUsage::new(3, 2, 5)));
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let msg = ChatMessage::from_json(
            r#"{"role":"user","content":"hi","tool_calls":[{"tool_name":"ls"}],"is_streaming":false}"#,
        )
        .unwrap();
        assert_eq!(msg.tool_calls.unwrap()[0].tool_name, "ls");
    }

    #[test]
    fn optional_fields_default() {
        let msg = ChatMessage::from_json(r#"{"role":"system","content":"boot"}"#).unwrap();
        assert_eq!(msg, ChatMessage::system("boot"));
        assert!(!msg.is_streaming);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = ChatMessage::from_json(r#"{"role":"robot","content":"beep"}"#).unwrap_err();
        assert!(matches!(err, RenderError::UnknownRole(ref r) if r == "robot"));
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn malformed_json_is_invalid_message() {
        let err = ChatMessage::from_json("{").unwrap_err();
        assert!(matches!(err, RenderError::InvalidMessage(_)));
    }

    #[test]
    fn argument_count_without_arguments_is_zero() {
        assert_eq!(ToolCall::new("noop").argument_count(), 0);
        let call = ToolCall::new("grep").with_argument("pattern", "fn").with_argument("path", ".");
        assert_eq!(call.argument_count(), 2);
    }
}
