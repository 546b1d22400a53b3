use std::sync::Arc;

use folio_media::MediaStore;
use folio_notify::ContactNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Media CDN client. `None` when no CDN account is configured.
    pub media: Option<Arc<dyn MediaStore>>,
    /// Contact notification sender.
    pub notifier: Arc<dyn ContactNotifier>,
}
