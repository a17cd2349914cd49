//! HTTP route handlers.
//!
//! Two routes: the greeting on `/` and the liveness probe on `/health`.
//! Anything else falls through to the framework defaults (404 for unknown
//! paths, 405 for unsupported methods).
//!
//! Every request is traced inside a span keyed by a generated request id.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        // Outermost layer so the request span wraps routing and the handler
        .layer(middleware::from_fn(request_span_layer))
}
