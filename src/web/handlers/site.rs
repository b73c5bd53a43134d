use axum::Json;

use crate::site::{directory, SiteDirectory};

/// GET /v1/site
pub async fn site_directory() -> Json<&'static SiteDirectory> {
    Json(directory())
}
