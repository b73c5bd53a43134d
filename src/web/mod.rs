//! # Web API
//!
//! axum application exposing the registration email function, health probes
//! and the static site directory.

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod routes;
pub mod state;

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{NotificationError, Result};
pub use state::AppState;

/// Build the full router with middleware applied
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.web.request_timeout();

    let router = Router::new()
        .merge(routes::notification_routes())
        .merge(routes::ambient_routes(request_timeout));

    middleware::apply_middleware_stack(router).with_state(state)
}

/// Bind and serve until `shutdown` resolves
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let bind_address = state.config.web.bind_address.clone();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        NotificationError::configuration(format!("Failed to bind {bind_address}: {e}"))
    })?;

    info!(bind_address = %bind_address, "Registration notifier listening");

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| NotificationError::transport(format!("HTTP server error: {e}")))?;

    info!("Registration notifier stopped");
    Ok(())
}
