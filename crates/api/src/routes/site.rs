//! Route definitions for the public `/site` aggregate.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/site`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::homepage))
        .route("/services", get(site::services))
}
