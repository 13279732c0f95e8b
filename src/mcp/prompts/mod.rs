//! MCP Prompts module - parameterized message templates.

pub mod support;
pub mod writing;

use std::collections::HashMap;

use serde::Serialize;

use crate::db::AppState;
use crate::mcp::ServerProfile;

/// Prompt descriptor per MCP spec.
#[derive(Debug, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Serialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

/// Result of prompts/get per MCP spec.
#[derive(Debug, Serialize)]
pub struct PromptResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: PromptContent,
}

#[derive(Debug, Serialize)]
pub struct PromptContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl PromptResult {
    /// Single user message, the only shape these prompts produce.
    pub fn user_message(description: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            messages: vec![PromptMessage {
                role: "user".to_string(),
                content: PromptContent {
                    content_type: "text".to_string(),
                    text: text.into(),
                },
            }],
        }
    }
}

pub type PromptArguments = HashMap<String, String>;

/// Prompts one server profile serves.
pub struct PromptCatalog {
    profile: ServerProfile,
}

impl PromptCatalog {
    pub fn new(profile: ServerProfile) -> Self {
        Self { profile }
    }

    pub fn list(&self) -> Vec<PromptDescriptor> {
        match self.profile {
            ServerProfile::Support => vec![support::descriptor()],
            ServerProfile::Feed => vec![
                writing::greet_user_descriptor(),
                writing::email_descriptor(),
                writing::analyze_excel_descriptor(),
                writing::code_review_descriptor(),
            ],
        }
    }

    /// Render a prompt by name. `Err` carries the message for an RPC
    /// error response.
    pub fn get(
        &self,
        name: &str,
        arguments: &PromptArguments,
        state: &AppState,
    ) -> Result<PromptResult, String> {
        match (self.profile, name) {
            (ServerProfile::Support, support::PROMPT_NAME) => support::render(arguments, state),
            (ServerProfile::Feed, writing::GREET_USER_PROMPT) => {
                writing::render_greet_user(arguments)
            }
            (ServerProfile::Feed, writing::EMAIL_PROMPT) => writing::render_email(arguments),
            (ServerProfile::Feed, writing::ANALYZE_EXCEL_PROMPT) => {
                writing::render_analyze_excel(arguments)
            }
            (ServerProfile::Feed, writing::CODE_REVIEW_PROMPT) => {
                writing::render_code_review(arguments)
            }
            _ => Err(format!("Prompt '{}' is not available on this server.", name)),
        }
    }
}

/// Fetch a required prompt argument by name.
fn require_argument<'a>(
    arguments: &'a PromptArguments,
    name: &str,
    prompt: &str,
) -> Result<&'a str, String> {
    arguments
        .get(name)
        .map(|value| value.as_str())
        .ok_or_else(|| format!("Missing required argument '{}' for prompt '{}'.", name, prompt))
}
