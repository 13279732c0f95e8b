//! Tool definition for the customer support summary.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "generate_support_summary";

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Generate a concise summary of recent support tickets for a customer. ",
            "The summary includes customer and subscription details, ticket counts ",
            "by status and priority, and the individual tickets in the selected ",
            "window, newest first."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "customer_id": {
                    "type": "string",
                    "description": "The unique ID of the customer (e.g., ACM001, GLX002, UMB003)"
                },
                "timeframe": {
                    "type": "string",
                    "description": "Lookback period for support tickets (7days, 30days, 90days)",
                    "default": "30days"
                }
            },
            "required": ["customer_id"]
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct SupportSummaryRequest {
    pub customer_id: String,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

fn default_timeframe() -> String {
    "30days".to_string()
}
