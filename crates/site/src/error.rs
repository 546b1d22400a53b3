/// Errors surfaced by the site client and admin state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with its error envelope.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Input was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// No live admin session; the user must log in again.
    #[error("Not logged in")]
    LoggedOut,

    /// The local session file could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A response or stored session could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// `true` when the server refused the credentials or session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. } | ClientError::LoggedOut)
    }
}

impl From<folio_core::error::CoreError> for ClientError {
    fn from(err: folio_core::error::CoreError) -> Self {
        match err {
            folio_core::error::CoreError::Validation(msg) => ClientError::Validation(msg),
            other => ClientError::Validation(other.to_string()),
        }
    }
}
