//! Contact form state for the public page.

use folio_core::contact::ContactForm;

use crate::client::{ContactReceipt, PublicApi};
use crate::error::ClientError;

/// Outcome of the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sent {
        email_sent: bool,
    },
    Failed(String),
}

/// The form fields plus the status of the last submit.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactFormState {
    /// Check the form with the server's rules, then send it.
    ///
    /// Invalid input never reaches the API. On success the fields are
    /// cleared; on failure they are kept so the visitor can retry.
    pub async fn submit(&mut self, api: &dyn PublicApi) -> Result<ContactReceipt, ClientError> {
        let form = match self.form.clone().into_validated() {
            Ok(form) => form,
            Err(e) => {
                let err = ClientError::from(e);
                self.status = SubmitStatus::Failed(err.to_string());
                return Err(err);
            }
        };

        match api.submit_contact(&form).await {
            Ok(receipt) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent {
                    email_sent: receipt.email_sent,
                };
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submit failed");
                self.status = SubmitStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::testing::FakeApi;

    use super::*;

    #[tokio::test]
    async fn invalid_form_never_calls_api() {
        let api = FakeApi::default();
        let mut state = ContactFormState {
            form: ContactForm {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "short".into(),
            },
            ..Default::default()
        };

        assert_matches!(state.submit(&api).await, Err(ClientError::Validation(_)));
        assert!(api.state().contacts.is_empty());
        assert_matches!(state.status, SubmitStatus::Failed(_));
    }

    #[tokio::test]
    async fn valid_form_is_sent_and_cleared() {
        let api = FakeApi::default();
        let mut state = ContactFormState {
            form: ContactForm {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "I would like a quote.".into(),
            },
            ..Default::default()
        };

        let receipt = state.submit(&api).await.unwrap();

        assert_eq!(receipt.submission.name, "Jane");
        assert!(!receipt.submission.is_read);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status, SubmitStatus::Sent { email_sent: true });
        assert_eq!(api.state().contacts.len(), 1);
    }
}
