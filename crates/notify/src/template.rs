//! Template-based email API (EmailJS-compatible REST endpoint).
//!
//! The provider renders its stored template with the `template_params`
//! object and delivers the result to the account's configured inbox.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{ContactEmail, ContactNotifier, NotifyError, DEFAULT_RECIPIENT_NAME};

const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and template selection for the email API.
#[derive(Debug, Clone)]
pub struct TemplateMailerConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`.
    pub public_key: String,
    /// Private key, sent as `accessToken` when present.
    pub private_key: Option<String>,
    pub api_url: String,
    pub recipient_name: String,
}

impl TemplateMailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless service id, template id and public key are all set.
    ///
    /// | Variable                 | Required | Default                                        |
    /// |--------------------------|----------|------------------------------------------------|
    /// | `EMAILJS_SERVICE_ID`     | yes      | -                                              |
    /// | `EMAILJS_TEMPLATE_ID`    | yes      | -                                              |
    /// | `EMAILJS_PUBLIC_KEY`     | yes      | -                                              |
    /// | `EMAILJS_PRIVATE_KEY`    | no       | -                                              |
    /// | `EMAILJS_API_URL`        | no       | `https://api.emailjs.com/api/v1.0/email/send`  |
    /// | `CONTACT_RECIPIENT_NAME` | no       | `Portfolio Owner`                              |
    pub fn from_env() -> Option<Self> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Some(Self {
            service_id: var("EMAILJS_SERVICE_ID")?,
            template_id: var("EMAILJS_TEMPLATE_ID")?,
            public_key: var("EMAILJS_PUBLIC_KEY")?,
            private_key: var("EMAILJS_PRIVATE_KEY"),
            api_url: var("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            recipient_name: var("CONTACT_RECIPIENT_NAME")
                .unwrap_or_else(|| DEFAULT_RECIPIENT_NAME.to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_name: &'a str,
    reply_to: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

/// Sends contact notifications through the template email API.
pub struct TemplateMailer {
    client: reqwest::Client,
    config: TemplateMailerConfig,
}

impl TemplateMailer {
    pub fn new(config: TemplateMailerConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, email: &'a ContactEmail) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: TemplateParams {
                from_name: &email.from_name,
                from_email: &email.from_email,
                message: &email.message,
                to_name: &self.config.recipient_name,
                reply_to: &email.from_email,
            },
        }
    }
}

#[async_trait]
impl ContactNotifier for TemplateMailer {
    async fn notify(&self, email: &ContactEmail) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .json(&self.request_body(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(from_email = %email.from_email, "Contact notification sent via template API");
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "template"
    }
}
