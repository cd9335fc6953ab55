//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing, body limit),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// Unknown paths fall through to axum's empty 404, and known paths hit with
/// another method get its 405.
pub fn create_router(state: AppState) -> Router {
    // The React front-end is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/process-data", post(handlers::process_data))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
