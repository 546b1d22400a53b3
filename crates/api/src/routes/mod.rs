pub mod auth;
pub mod contacts;
pub mod health;
pub mod media;
pub mod projects;
pub mod settings;
pub mod site;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    rotate refresh token (public)
/// /auth/logout                     revoke all sessions (admin)
/// /auth/session                    current session (admin)
///
/// /projects                        list (public), create, update, delete?id= (admin)
/// /projects/{id}                   get (public)
///
/// /testimonials                    list (public), create, update, delete?id= (admin)
///
/// /contacts                        submit (public), list, mark read, delete?id= (admin)
///
/// /settings/hero                   get (public), upsert (admin)
/// /settings/about                  get (public), upsert (admin)
/// /settings/admin                  get, replace credentials (admin)
///
/// /media/upload                    multi-file upload (admin)
/// /media                           delete?public_id=&resource_type= (admin)
///
/// /site                            homepage aggregate (public)
/// /site/services                   static service catalog (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::router())
        .nest("/testimonials", testimonials::router())
        .nest("/contacts", contacts::router())
        .nest("/settings", settings::router())
        .nest("/media", media::router())
        .nest("/site", site::router())
}
