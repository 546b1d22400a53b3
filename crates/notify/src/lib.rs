//! Contact form email notification.
//!
//! A [`ContactNotifier`] tells the site owner about a new contact
//! submission. Delivery is best effort: callers log failures and carry on.
//! [`notifier_from_env`] picks the template-API mailer, then SMTP, then
//! [`DisabledNotifier`].

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::contact::ContactForm;
use serde::Serialize;

pub mod error;
pub mod smtp;
pub mod template;

pub use error::NotifyError;
pub use smtp::{SmtpConfig, SmtpMailer};
pub use template::{TemplateMailer, TemplateMailerConfig};

/// Name used to greet the recipient when `CONTACT_RECIPIENT_NAME` is unset.
pub const DEFAULT_RECIPIENT_NAME: &str = "Portfolio Owner";

/// The content of one contact notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmail {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl From<&ContactForm> for ContactEmail {
    fn from(form: &ContactForm) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

/// Sends a notification for each new contact submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, email: &ContactEmail) -> Result<(), NotifyError>;

    /// Short label for logs, e.g. `"template"` or `"smtp"`.
    fn kind(&self) -> &'static str;
}

/// Used when no mail transport is configured. Every call fails with
/// [`NotifyError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl ContactNotifier for DisabledNotifier {
    async fn notify(&self, _email: &ContactEmail) -> Result<(), NotifyError> {
        Err(NotifyError::NotConfigured)
    }

    fn kind(&self) -> &'static str {
        "disabled"
    }
}

/// Build the notifier described by the environment.
///
/// The template API wins when both it and SMTP are configured.
pub fn notifier_from_env() -> Result<Arc<dyn ContactNotifier>, NotifyError> {
    if let Some(config) = TemplateMailerConfig::from_env() {
        return Ok(Arc::new(TemplateMailer::new(config)?));
    }
    if let Some(config) = SmtpConfig::from_env() {
        return Ok(Arc::new(SmtpMailer::new(config)));
    }
    tracing::warn!("No email transport configured; contact notifications are disabled");
    Ok(Arc::new(DisabledNotifier))
}
