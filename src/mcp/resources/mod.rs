//! MCP Resources module - log files and the sample product catalog.
//!
//! Resources follow the same profile split as tools: the support endpoint
//! serves log files, the feed endpoint serves the product template.

pub mod logs;
pub mod products;

use serde::Serialize;

use crate::db::AppState;
use crate::mcp::ServerProfile;

/// Resource descriptor per MCP spec.
#[derive(Debug, Serialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Parameterized resource template per MCP spec.
#[derive(Debug, Serialize)]
pub struct ResourceTemplate {
    #[serde(rename = "uriTemplate")]
    pub uri_template: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// One block of content returned from resources/read.
#[derive(Debug, Serialize)]
pub struct ResourceContent {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

/// Resources one server profile serves.
pub struct ResourceCatalog {
    profile: ServerProfile,
}

impl ResourceCatalog {
    pub fn new(profile: ServerProfile) -> Self {
        Self { profile }
    }

    pub fn list(&self) -> Vec<ResourceDescriptor> {
        match self.profile {
            ServerProfile::Support => vec![logs::app_log_descriptor()],
            ServerProfile::Feed => Vec::new(),
        }
    }

    pub fn templates(&self) -> Vec<ResourceTemplate> {
        match self.profile {
            ServerProfile::Support => vec![logs::customer_log_template()],
            ServerProfile::Feed => vec![products::template()],
        }
    }

    /// Resolve a resources/read URI. `Err` carries the message for an RPC
    /// error response.
    pub fn read(&self, uri: &str, state: &AppState) -> Result<Vec<ResourceContent>, String> {
        match self.profile {
            ServerProfile::Support => {
                if uri == logs::APP_LOG_URI {
                    return logs::read_app_log(state).map(|content| vec![content]);
                }
                if let Some(customer_id) = logs::parse_customer_log_uri(uri) {
                    return logs::read_customer_log(state, &customer_id)
                        .map(|content| vec![content]);
                }
                Err(unknown_resource(uri))
            }
            ServerProfile::Feed => {
                if let Some((category, product_id)) = products::parse_uri(uri) {
                    return Ok(vec![products::read(uri, &category, &product_id)]);
                }
                Err(unknown_resource(uri))
            }
        }
    }
}

fn unknown_resource(uri: &str) -> String {
    format!("Resource '{}' is not available on this server.", uri)
}
