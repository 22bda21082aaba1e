//! HTTP route handlers.
//!
//! Two routes are exposed: the greeting at `/` and the health probe at
//! `/health`. Anything else falls through to axum's default 404 handling.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and middleware layers.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
