//! Route definitions for the `/media` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", delete(media::delete))
        .route("/upload", post(media::upload))
}
