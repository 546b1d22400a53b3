//! Route definitions for the `/testimonials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(testimonials::list)
            .post(testimonials::create)
            .put(testimonials::update)
            .delete(testimonials::delete),
    )
}
