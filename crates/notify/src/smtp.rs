//! Contact notification delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport. If `SMTP_HOST` or
//! `CONTACT_RECIPIENT_EMAIL` is not set, [`SmtpConfig::from_env`] returns
//! `None` and no mailer should be constructed.

use async_trait::async_trait;

use crate::{ContactEmail, ContactNotifier, NotifyError};

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@folio.local";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Inbox that receives contact notifications.
    pub recipient: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                  | Required | Default               |
    /// |---------------------------|----------|-----------------------|
    /// | `SMTP_HOST`               | yes      | -                     |
    /// | `CONTACT_RECIPIENT_EMAIL` | yes      | -                     |
    /// | `SMTP_PORT`               | no       | `587`                 |
    /// | `SMTP_FROM`               | no       | `noreply@folio.local` |
    /// | `SMTP_USER`               | no       | -                     |
    /// | `SMTP_PASSWORD`           | no       | -                     |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let recipient = std::env::var("CONTACT_RECIPIENT_EMAIL").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            recipient,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends contact notifications as plain-text email.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, email: &ContactEmail) -> Result<lettre::Message, NotifyError> {
        use lettre::message::{header::ContentType, Mailbox};

        let reply_to = Mailbox::new(Some(email.from_name.clone()), email.from_email.parse()?);

        lettre::Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.recipient.parse()?)
            .reply_to(reply_to)
            .subject(subject_for(email))
            .header(ContentType::TEXT_PLAIN)
            .body(body_for(email))
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

fn subject_for(email: &ContactEmail) -> String {
    format!("New contact message from {}", email.from_name)
}

fn body_for(email: &ContactEmail) -> String {
    format!(
        "Name: {}\nEmail: {}\n\n{}",
        email.from_name, email.from_email, email.message
    )
}

#[async_trait]
impl ContactNotifier for SmtpMailer {
    async fn notify(&self, email: &ContactEmail) -> Result<(), NotifyError> {
        use lettre::{
            transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
            Tokio1Executor,
        };

        let message = self.build_message(email)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(message).await?;

        tracing::info!(from_email = %email.from_email, "Contact notification sent via SMTP");
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn mailer() -> SmtpMailer {
        SmtpMailer::new(SmtpConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            recipient: "owner@example.com".to_string(),
            smtp_user: None,
            smtp_password: None,
        })
    }

    fn email(from_email: &str) -> ContactEmail {
        ContactEmail {
            from_name: "Jane".to_string(),
            from_email: from_email.to_string(),
            message: "Could we talk about a kitchen?".to_string(),
        }
    }

    #[test]
    fn subject_and_body_name_the_sender() {
        let email = email("jane@x.com");
        assert_eq!(subject_for(&email), "New contact message from Jane");
        assert!(body_for(&email).contains("Email: jane@x.com"));
        assert!(body_for(&email).ends_with("Could we talk about a kitchen?"));
    }

    #[test]
    fn builds_message_for_valid_addresses() {
        assert!(mailer().build_message(&email("jane@x.com")).is_ok());
    }

    #[test]
    fn invalid_reply_to_is_address_error() {
        assert_matches!(
            mailer().build_message(&email("not-an-email")),
            Err(NotifyError::Address(_))
        );
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(SmtpConfig::from_env().is_none());
    }
}
