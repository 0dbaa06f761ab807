use crate::dispatch::error::ValidationError;
use crate::dispatch::error::ValidationError::{NoRecipient, TooManyRecipients};
use derive_getters::Getters;
use dto::email::EmailRequest;

pub const MAX_RECIPIENTS: usize = 10;

/// A batch of recipients sharing the same subject and body.
/// It can only be built with 1 to [MAX_RECIPIENTS] recipients.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct DispatchRequest {
    recipients: Vec<String>,
    subject: String,
    body: String,
}

impl DispatchRequest {
    pub fn new(
        recipients: Vec<String>,
        subject: String,
        body: String,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(NoRecipient);
        }
        if recipients.len() > MAX_RECIPIENTS {
            return Err(TooManyRecipients);
        }

        Ok(Self {
            recipients,
            subject,
            body,
        })
    }
}

impl TryFrom<EmailRequest> for DispatchRequest {
    type Error = ValidationError;

    fn try_from(email_request: EmailRequest) -> Result<Self, Self::Error> {
        let (emails, subject, body) = email_request.dissolve();
        Self::new(emails, subject, body)
    }
}
