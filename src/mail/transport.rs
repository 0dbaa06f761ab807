use crate::mail::error::TransportError;

/// Something able to deliver a single email to a single recipient.
/// Each call is an independent attempt: nothing is shared between two calls.
#[rocket::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError>;
}
