//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}` - Short link redirect
//! - `GET /health` - Health check
//! - `/links/*`    - Link management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization is applied around the finished router
//! in [`crate::server`], where it has to wrap the whole service.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(trace::layer())
}
