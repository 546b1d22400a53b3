/// Error type for contact notification failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// No mail transport is configured.
    #[error("Email delivery is not configured")]
    NotConfigured,

    /// The template API request itself failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The template API returned a non-2xx status code.
    #[error("Email API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}
