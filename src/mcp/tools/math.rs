//! Arithmetic tool definitions.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const MULTIPLY_TOOL: &str = "multiply";
pub const ADD_TOOL: &str = "add";
pub const SUBTRACT_TOOL: &str = "subtract";
pub const DIVIDE_TOOL: &str = "divide";

pub fn multiply_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: MULTIPLY_TOOL.to_string(),
        description: "Multiply two numbers.".to_string(),
        input_schema: ab_schema(),
    }
}

// The historical parameter names differ from the other operations.
pub fn add_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: ADD_TOOL.to_string(),
        description: "Add two numbers.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "x": { "type": "number", "description": "The first number" },
                "y": { "type": "number", "description": "The second number" }
            },
            "required": ["x", "y"]
        }),
    }
}

pub fn subtract_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SUBTRACT_TOOL.to_string(),
        description: "Subtract two numbers.".to_string(),
        input_schema: ab_schema(),
    }
}

pub fn divide_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: DIVIDE_TOOL.to_string(),
        description: "Divide two numbers.".to_string(),
        input_schema: ab_schema(),
    }
}

fn ab_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "a": { "type": "number", "description": "The first number" },
            "b": { "type": "number", "description": "The second number" }
        },
        "required": ["a", "b"]
    })
}

#[derive(Debug, Deserialize)]
pub struct OperandsAb {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Deserialize)]
pub struct OperandsXy {
    pub x: f64,
    pub y: f64,
}

pub fn divide(a: f64, b: f64) -> Result<f64, String> {
    if b == 0.0 {
        return Err("Cannot divide by zero.".to_string());
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        assert_eq!(multiply_descriptor().name, MULTIPLY_TOOL);
        assert_eq!(add_descriptor().input_schema["required"], json!(["x", "y"]));
        assert_eq!(
            subtract_descriptor().input_schema["required"],
            json!(["a", "b"])
        );
        assert_eq!(divide_descriptor().name, DIVIDE_TOOL);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(9.0, 3.0), Ok(3.0));
        assert_eq!(divide(1.0, 0.0), Err("Cannot divide by zero.".to_string()));
    }
}
