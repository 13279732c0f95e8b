//! MCP Service - Core JSON-RPC 2.0 request handler.

use actix_web::web;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::AppState;
use crate::mcp::prompts::{PromptArguments, PromptCatalog, PromptDescriptor};
use crate::mcp::resources::{
    ResourceCatalog, ResourceContent, ResourceDescriptor, ResourceTemplate,
};
use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::tools::registry::ToolDescriptor;
use crate::mcp::tools::ToolRegistry;
use crate::mcp::ServerProfile;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Core MCP request handler for one server profile.
#[derive(Clone)]
pub struct McpService {
    tools: Arc<ToolRegistry>,
    resources: Arc<ResourceCatalog>,
    prompts: Arc<PromptCatalog>,
    state: web::Data<AppState>,
    title: String,
}

impl McpService {
    pub fn new(profile: ServerProfile, state: web::Data<AppState>, title: impl Into<String>) -> Self {
        Self {
            tools: Arc::new(ToolRegistry::new(profile)),
            resources: Arc::new(ResourceCatalog::new(profile)),
            prompts: Arc::new(PromptCatalog::new(profile)),
            state,
            title: title.into(),
        }
    }

    pub async fn handle_request(&self, request: RpcRequest) -> Option<OutboundResponse> {
        if request.jsonrpc != "2.0" {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::error(
                request.id.clone(),
                -32600,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params).await),
            "resources/list" => Some(self.handle_resources_list(id)),
            "resources/read" => Some(self.handle_resources_read(id, params)),
            "resources/templates/list" => Some(self.handle_resource_templates_list(id)),
            "prompts/list" => Some(self.handle_prompts_list(id)),
            "prompts/get" => Some(self.handle_prompts_get(id, params)),
            "ping" => Some(OutboundResponse::success(id, json!({ "ok": true }))),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(OutboundResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!(
            "client requested initialization: {} v{}",
            parsed.client_info.name,
            parsed
                .client_info
                .version
                .clone()
                .unwrap_or_else(|| "unknown".into())
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some(self.title.clone()),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
                prompts: PromptsCapability {
                    list_changed: false,
                },
            },
        };

        OutboundResponse::success(id, serde_json::to_value(result).unwrap())
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let tools = self.tools.list_tools();
        let payload = ListToolsResult {
            tools,
            next_cursor: None,
        };

        OutboundResponse::success(id, serde_json::to_value(payload).unwrap())
    }

    async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        let result = self
            .tools
            .call_tool(&parsed.name, parsed.arguments, self.state.get_ref())
            .await;
        OutboundResponse::success(id, serde_json::to_value(result).unwrap())
    }

    fn handle_resources_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListResourcesResult {
            resources: self.resources.list(),
            next_cursor: None,
        };
        OutboundResponse::success(id, serde_json::to_value(payload).unwrap())
    }

    fn handle_resources_read(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: ResourceReadParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        match self.resources.read(&parsed.uri, self.state.get_ref()) {
            Ok(contents) => {
                let payload = ReadResourceResult { contents };
                OutboundResponse::success(id, serde_json::to_value(payload).unwrap())
            }
            Err(message) => OutboundResponse::error(id, -32000, message),
        }
    }

    fn handle_resource_templates_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ResourceTemplateListResult {
            resource_templates: self.resources.templates(),
            next_cursor: None,
        };
        OutboundResponse::success(id, serde_json::to_value(payload).unwrap())
    }

    fn handle_prompts_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = PromptListResult {
            prompts: self.prompts.list(),
            next_cursor: None,
        };
        OutboundResponse::success(id, serde_json::to_value(payload).unwrap())
    }

    fn handle_prompts_get(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: PromptGetParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        match self
            .prompts
            .get(&parsed.name, &parsed.arguments, self.state.get_ref())
        {
            Ok(result) => OutboundResponse::success(id, serde_json::to_value(result).unwrap()),
            Err(message) => OutboundResponse::error(id, -32001, message),
        }
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "clientInfo")]
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
    resources: ResourcesCapability,
    prompts: PromptsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ResourcesCapability {
    subscribe: bool,
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct PromptsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ListResourcesResult {
    resources: Vec<ResourceDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResourceReadParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct ReadResourceResult {
    contents: Vec<ResourceContent>,
}

#[derive(Debug, Serialize)]
struct ResourceTemplateListResult {
    #[serde(rename = "resourceTemplates")]
    resource_templates: Vec<ResourceTemplate>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
struct PromptListResult {
    prompts: Vec<PromptDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptGetParams {
    name: String,
    #[serde(default)]
    arguments: PromptArguments,
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    match params {
        Some(value) => serde_json::from_value(value).map_err(|err| err.to_string()),
        None => serde_json::from_value(Value::Null).map_err(|err| err.to_string()),
    }
}
