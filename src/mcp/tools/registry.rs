//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per MCP spec, scoped to the
//! profile a binary serves.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::AppState;
use crate::mcp::content::ToolResult;
use crate::mcp::ServerProfile;
use crate::support::generate_support_summary;

use super::{feed_search, greetings, math, support_summary};

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, serde::Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for the tools one server profile exposes.
pub struct ToolRegistry {
    profile: ServerProfile,
}

impl ToolRegistry {
    pub fn new(profile: ServerProfile) -> Self {
        Self { profile }
    }

    /// List the available tools per MCP spec.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        match self.profile {
            ServerProfile::Support => vec![support_summary::descriptor()],
            ServerProfile::Feed => vec![
                feed_search::fcc_news_descriptor(),
                feed_search::fcc_youtube_descriptor(),
                feed_search::gehc_youtube_descriptor(),
                feed_search::capgemini_news_descriptor(),
                greetings::formal_descriptor(),
                greetings::street_descriptor(),
                math::multiply_descriptor(),
                math::add_descriptor(),
                math::subtract_descriptor(),
                math::divide_descriptor(),
            ],
        }
    }

    /// Call a tool by name with the given arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
        state: &AppState,
    ) -> ToolResult {
        match (self.profile, name) {
            (ServerProfile::Support, support_summary::TOOL_NAME) => {
                self.call_support_summary(arguments, state).await
            }

            (ServerProfile::Feed, feed_search::FCC_NEWS_TOOL) => {
                self.call_feed_search(
                    arguments,
                    state,
                    feed_search::FCC_NEWS_FEED,
                    true,
                    "No results found",
                )
                .await
            }
            (ServerProfile::Feed, feed_search::FCC_YOUTUBE_TOOL) => {
                self.call_feed_search(
                    arguments,
                    state,
                    feed_search::FCC_YOUTUBE_FEED,
                    false,
                    "No videos found",
                )
                .await
            }
            (ServerProfile::Feed, feed_search::GEHC_YOUTUBE_TOOL) => {
                self.call_feed_search(
                    arguments,
                    state,
                    feed_search::GEHC_YOUTUBE_FEED,
                    false,
                    "No videos found",
                )
                .await
            }
            (ServerProfile::Feed, feed_search::CAPGEMINI_NEWS_TOOL) => {
                self.call_feed_search(
                    arguments,
                    state,
                    feed_search::CAPGEMINI_NEWS_FEED,
                    true,
                    "No results found",
                )
                .await
            }

            (ServerProfile::Feed, greetings::FORMAL_TOOL) => {
                self.call_greeting(arguments, greetings::formal_greeting)
            }
            (ServerProfile::Feed, greetings::STREET_TOOL) => {
                self.call_greeting(arguments, greetings::street_greeting)
            }

            (ServerProfile::Feed, math::MULTIPLY_TOOL) => {
                self.call_binary_op(arguments, |a, b| Ok(a * b))
            }
            (ServerProfile::Feed, math::ADD_TOOL) => self.call_add(arguments),
            (ServerProfile::Feed, math::SUBTRACT_TOOL) => {
                self.call_binary_op(arguments, |a, b| Ok(a - b))
            }
            (ServerProfile::Feed, math::DIVIDE_TOOL) => {
                self.call_binary_op(arguments, math::divide)
            }

            _ => {
                let available = self
                    .list_tools()
                    .into_iter()
                    .map(|tool| tool.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                ToolResult::error(format!(
                    "Tool '{}' is not available. Available tools: {}",
                    name, available
                ))
            }
        }
    }

    async fn call_support_summary(
        &self,
        arguments: Option<Value>,
        state: &AppState,
    ) -> ToolResult {
        let request = match parse_arguments::<support_summary::SupportSummaryRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        let summary =
            generate_support_summary(state, &request.customer_id, &request.timeframe).await;
        ToolResult::success_text(summary)
    }

    async fn call_feed_search(
        &self,
        arguments: Option<Value>,
        state: &AppState,
        feed_url: &str,
        search_descriptions: bool,
        empty_message: &str,
    ) -> ToolResult {
        let request = match parse_arguments::<feed_search::FeedSearchRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        match state
            .feeds
            .search(
                feed_url,
                &request.query,
                request.max_results,
                search_descriptions,
            )
            .await
        {
            Ok(hits) if hits.is_empty() => {
                ToolResult::success_json(&json!([{ "message": empty_message }]))
            }
            Ok(hits) => ToolResult::success_json(&hits),
            Err(err) => ToolResult::error(format!("Failed to search feed: {}", err)),
        }
    }

    fn call_greeting(&self, arguments: Option<Value>, greet: fn(&str) -> String) -> ToolResult {
        let request = match parse_arguments::<greetings::GreetRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        ToolResult::success_text(greet(&request.name))
    }

    fn call_binary_op(
        &self,
        arguments: Option<Value>,
        op: fn(f64, f64) -> Result<f64, String>,
    ) -> ToolResult {
        let request = match parse_arguments::<math::OperandsAb>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        match op(request.a, request.b) {
            Ok(value) => ToolResult::success_text(value.to_string()),
            Err(err) => ToolResult::error(err),
        }
    }

    fn call_add(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<math::OperandsXy>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        ToolResult::success_text((request.x + request.y).to_string())
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {}", err))
}
