//! Sample product catalog resource for the demo endpoint.

use serde_json::{json, Value};

use super::{ResourceContent, ResourceTemplate};

pub const PRODUCTS_TEMPLATE: &str = "products://{category}/{product_id}";

const SCHEME: &str = "products://";

pub fn template() -> ResourceTemplate {
    ResourceTemplate {
        uri_template: PRODUCTS_TEMPLATE.to_string(),
        name: "product_info".to_string(),
        description: Some(
            "Retrieve detailed information about a specific product".to_string(),
        ),
        mime_type: "application/json".to_string(),
    }
}

/// Split a products:// URI into (category, product_id).
pub fn parse_uri(uri: &str) -> Option<(String, String)> {
    let rest = uri.strip_prefix(SCHEME)?;
    let (category, product_id) = rest.split_once('/')?;
    if category.is_empty() || product_id.is_empty() || product_id.contains('/') {
        return None;
    }
    Some((category.to_string(), product_id.to_string()))
}

/// Unknown products yield a JSON error payload, not an RPC error.
pub fn read(uri: &str, category: &str, product_id: &str) -> ResourceContent {
    let payload = match lookup(category, product_id) {
        Some(product) => json!({
            "product": product,
            "category": category,
            "id": product_id,
        }),
        None => json!({
            "error": format!("Product {} in category {} not found", product_id, category)
        }),
    };

    ResourceContent {
        uri: uri.to_string(),
        mime_type: "application/json".to_string(),
        text: serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string()),
    }
}

fn lookup(category: &str, product_id: &str) -> Option<Value> {
    let product = match (category, product_id) {
        ("electronics", "e123") => {
            json!({ "name": "Smartphone XYZ", "price": 999.99, "in_stock": true })
        }
        ("electronics", "e456") => {
            json!({ "name": "Laptop ABC", "price": 1299.99, "in_stock": false })
        }
        ("books", "b789") => {
            json!({ "name": "Python Programming", "price": 49.99, "in_stock": true })
        }
        ("books", "b101") => {
            json!({ "name": "AI Fundamentals", "price": 59.99, "in_stock": true })
        }
        _ => return None,
    };
    Some(product)
}
