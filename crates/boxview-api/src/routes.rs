//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::detect::detect;
use crate::handlers::health::health;
use crate::handlers::page::index;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/detect", post(detect));

    let page_routes = Router::new().route("/", get(index));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        // Both limits must move together: the multipart extractor checks
        // axum's own body limit before the tower-http layer is consulted.
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
