//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (admin)
/// PUT    /          -> update, id in body (admin)
/// DELETE /?id=      -> delete (admin)
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list)
                .post(projects::create)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}", get(projects::get_by_id))
}
