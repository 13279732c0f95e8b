//! MCP Stateless HTTP Handlers for Actix-Web.
//!
//! Stateless HTTP POST only; no connection state is kept between requests,
//! so the servers work behind serverless platforms as well.

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::mcp::rpc::RpcRequest;
use crate::mcp::service::McpService;

/// MCP State for Actix-Web (stateless version)
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(
    state: web::Data<Arc<McpState>>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("Received MCP request: {}", body.method);

    if let Some(response) = state.service.handle_request(body.into_inner()).await {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Configure MCP routes (stateless)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));

    // Keep /sse route for clients that still post there (same as /mcp)
    cfg.service(web::resource("/sse").route(web::post().to(rpc_handler)));
}
