//! Greeting tool definitions.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const FORMAL_TOOL: &str = "greet_user_formal_tool";
pub const STREET_TOOL: &str = "greet_user_street_style_tool";

pub fn formal_descriptor() -> ToolDescriptor {
    greet_descriptor(
        FORMAL_TOOL,
        "A tool that returns a greeting message in a very formal tone",
    )
}

pub fn street_descriptor() -> ToolDescriptor {
    greet_descriptor(
        STREET_TOOL,
        "A tool that returns a greeting message in street style",
    )
}

fn greet_descriptor(name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the person to greet"
                }
            },
            "required": ["name"]
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

pub fn formal_greeting(name: &str) -> String {
    format!("Good day to you, {}. I trust this message finds you well.", name)
}

pub fn street_greeting(name: &str) -> String {
    format!("Yo {}! Wassup? You good?", name)
}
