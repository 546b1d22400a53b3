/// Errors from the media storage layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CDN returned a non-2xx status code.
    #[error("Media API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The CDN answered but refused the operation (e.g. destroy result `"not found"`).
    #[error("Media operation rejected: {0}")]
    Rejected(String),

    /// A credential or setting required for this operation is missing.
    #[error("Media storage is not configured: {0}")]
    NotConfigured(String),
}
