//! # CORS Headers
//!
//! Stamps the fixed permissive cross-origin headers on every response,
//! success or failure. Pre-flight requests are answered by the route itself.

use axum::extract::Request;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::constants::cors;

pub async fn add_cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(cors::ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(cors::ALLOW_HEADERS),
    );

    response
}
