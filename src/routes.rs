//! Top-level router configuration combining the page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`       - Calculator form
//! - `POST /`       - Form submission, renders the estimate
//! - `GET  /health` - Liveness and version
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the calculator page
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Token bucket settings for the calculator page.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
    /// When `true`, the client IP is read from `X-Forwarded-For` / `X-Real-IP`
    /// headers instead of the peer socket address. Enable only behind a
    /// trusted reverse proxy.
    pub behind_proxy: bool,
}

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the client IP, so the router must be served with
/// connect info (see [`crate::server::run`]).
pub fn app_router(state: AppState, limits: RateLimit) -> NormalizePath<Router> {
    let page_router = web::routes::routes();
    let page_router = if limits.behind_proxy {
        page_router.layer(rate_limit::proxied_layer(
            limits.per_second,
            limits.burst,
        ))
    } else {
        page_router.layer(rate_limit::layer(limits.per_second, limits.burst))
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(page_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
