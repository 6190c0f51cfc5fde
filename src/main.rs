// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod config;
mod state;
mod dtos; // expose DTO modules
mod error;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use dotenvy::dotenv;
use std::net::SocketAddr;

use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Build configuration once; handlers open their own connections from it
    let config = config::Config::from_env();

    // Create application state
    let app_state = AppState::new(config.db.clone());

    let app = app(app_state);

    // Start server (axum 0.8 style) with HOST/PORT from config and graceful port selection
    let base_port = config.port;

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

/// Liveness marker at /, API surface under /api. CORS is wide open;
/// the storefront frontend is served from a different origin.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", routes::create_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "POS System API is running" }))
}
