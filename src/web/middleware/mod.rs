//! # Web API Middleware
//!
//! Request IDs, request tracing and the fixed CORS headers.

pub mod cors;
pub mod request_id;

use axum::middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Apply the middleware stack shared by every route
///
/// Order, outermost first:
/// 1. Request ID generation
/// 2. CORS headers
/// 3. Request tracing, with the request ID on the request span
pub fn apply_middleware_stack(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(TraceLayer::new_for_http().make_span_with(request_id::request_span))
        .layer(middleware::from_fn(cors::add_cors_headers))
        .layer(middleware::from_fn(request_id::add_request_id))
}
