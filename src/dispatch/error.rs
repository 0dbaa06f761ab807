use crate::dispatch::request::MAX_RECIPIENTS;
use thiserror::Error;

/// A batch that must not reach the dispatcher.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("No email addresses provided")]
    NoRecipient,
    #[error("Maximum {max} emails allowed", max = MAX_RECIPIENTS)]
    TooManyRecipients,
}
