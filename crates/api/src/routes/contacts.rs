//! Route definitions for the `/contacts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /          -> list (admin)
/// POST   /          -> create (public contact form)
/// PUT    /          -> mark_read (admin)
/// DELETE /?id=      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(contacts::list)
            .post(contacts::create)
            .put(contacts::mark_read)
            .delete(contacts::delete),
    )
}
