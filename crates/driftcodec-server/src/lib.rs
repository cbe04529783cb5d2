//! # driftcodec-server
//!
//! JSON-over-HTTP batch endpoint for DriftCodec.
//!
//! ```text
//! POST /parse-hex   {"hex": ["60dea8c0...", ...]}
//!   → [{"hexString": "...", "parsedData": {...}} | {"hexString": "...", "error": "..."}, ...]
//! GET  /health
//! ```
//!
//! Every input gets exactly one entry in the response, in request order.

pub mod config;
pub mod routes;

pub use config::ServerConfig;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use driftcodec_batch::BatchEngine;
use driftcodec_observability::DecodeMetrics;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state for all handlers.
pub struct AppState {
    pub engine: BatchEngine,
    pub metrics: DecodeMetrics,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            engine: BatchEngine::new(),
            metrics: DecodeMetrics::default(),
            config,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.body_limit();
    Router::new()
        .route("/parse-hex", post(routes::parse_hex))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
