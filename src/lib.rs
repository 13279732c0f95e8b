use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use std::sync::Arc;

pub mod db;
pub mod feed;
pub mod mcp;
pub mod support;

pub use crate::db::AppState;

use crate::mcp::{McpService, McpState, ServerProfile};

/// Run the customer support endpoint: the summary tool, log resources,
/// and the support briefing prompt.
pub async fn run_support_server() -> std::io::Result<()> {
    init_logging();
    dotenvy::dotenv().ok(); // Load .env file

    let state = web::Data::new(AppState::from_env());

    if let Err(err) = state.ensure_schema().await {
        log::error!(
            "Failed to prepare database at {}. Check TECHNOVA_DATABASE_PATH and file permissions. Error: {}",
            state.database_path,
            err
        );
        std::process::exit(1);
    }
    if let Err(err) = std::fs::create_dir_all(&state.logs_dir) {
        log::error!(
            "Failed to create logs directory {}: {}",
            state.logs_dir.display(),
            err
        );
        std::process::exit(1);
    }

    serve(
        ServerProfile::Support,
        state,
        "TechNova Customer Support MCP Server",
        "technova_support_server",
        8080,
    )
    .await
}

/// Run the demo endpoint: feed search, arithmetic and greeting tools,
/// writing prompts, and the product catalog resource.
pub async fn run_feed_server() -> std::io::Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let state = web::Data::new(AppState::from_env());

    serve(
        ServerProfile::Feed,
        state,
        "Feed Searcher MCP Server",
        "technova_feed_server",
        8081,
    )
    .await
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).try_init().ok();
}

async fn serve(
    profile: ServerProfile,
    state: web::Data<AppState>,
    title: &str,
    metrics_prefix: &str,
    default_port: u16,
) -> std::io::Result<()> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default_port);

    let prometheus = PrometheusMetricsBuilder::new(metrics_prefix)
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let mcp_state = Arc::new(McpState::new(McpService::new(profile, state, title)));

    log::info!("Starting {} at http://0.0.0.0:{}", title, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(web::Data::new(mcp_state.clone()))
            .configure(mcp::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
