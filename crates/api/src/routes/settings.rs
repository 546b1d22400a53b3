//! Route definitions for the `/settings` singletons.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET|PUT /hero    -> hero copy
/// GET|PUT /about   -> about copy and achievements
/// GET|PUT /admin   -> admin account (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero", get(settings::get_hero).put(settings::put_hero))
        .route("/about", get(settings::get_about).put(settings::put_about))
        .route("/admin", get(settings::get_admin).put(settings::put_admin))
}
