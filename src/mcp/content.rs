//! Content types for MCP tool responses.

use serde::{Deserialize, Serialize};

/// Content item in a tool result (MCP spec compatible). Every tool on
/// these servers produces text, so this carries no binary variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Content type identifier
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentItem {
    /// Create text content item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
        }
    }
}

/// Result of a tool call (MCP spec compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content items in the result
    pub content: Vec<ContentItem>,
    /// Whether this result represents an error
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    /// Create successful result.
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create success with a text message.
    pub fn success_text(message: impl Into<String>) -> Self {
        Self::success(vec![ContentItem::text(message)])
    }

    /// Create success carrying a JSON payload rendered as pretty text.
    pub fn success_json<T: Serialize>(value: &T) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
        Self::success_text(text)
    }

    /// Create error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_item_text() {
        let item = ContentItem::text("Hello world");
        assert_eq!(item.content_type, "text");
        assert_eq!(item.text, Some("Hello world".to_string()));
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success_text("Operation completed");
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("Something went wrong");
        assert!(result.is_error);
        assert_eq!(
            result.content[0].text,
            Some("Something went wrong".to_string())
        );
    }

    #[test]
    fn test_success_json_is_pretty_text() {
        let result = ToolResult::success_json(&json!([{ "title": "a", "url": "b" }]));
        let text = result.content[0].text.as_ref().unwrap();
        assert!(text.contains("\"title\": \"a\""));
        assert!(!result.is_error);
    }

    #[test]
    fn test_is_error_serializes_camel_case() {
        let encoded = serde_json::to_value(ToolResult::error("nope")).unwrap();
        assert_eq!(encoded["isError"], json!(true));
        assert_eq!(encoded["content"][0]["type"], json!("text"));
    }
}
