//! # Web API Routes

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, options};
use axum::Router;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::constants::routes;
use crate::web::handlers;
use crate::web::state::AppState;

/// The registration email function.
///
/// No request timeout and no body limit: either would answer with a status
/// other than 200/500 outside the JSON envelope, so the SMTP client's own
/// timeouts are the only bound.
pub fn notification_routes() -> Router<AppState> {
    Router::new().route(
        routes::SEND_REGISTRATION_EMAIL,
        options(handlers::notifications::preflight)
            .fallback(handlers::notifications::send_registration_email)
            .layer(DefaultBodyLimit::disable()),
    )
}

/// Health probes and static site data
pub fn ambient_routes(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route(routes::HEALTH, get(handlers::health::basic_health))
        .route(routes::HEALTH_LIVE, get(handlers::health::liveness_probe))
        .route(routes::HEALTH_READY, get(handlers::health::readiness_probe))
        .route(routes::SITE, get(handlers::site::site_directory))
        .layer(TimeoutLayer::new(request_timeout))
}
