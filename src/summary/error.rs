use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("Can't reach the completion API: {0}")]
    ConnectionFailed(String),
    #[error("The completion API answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("The completion API response can't be read: {0}")]
    MalformedResponse(String),
    #[error("OpenAI response was empty. Try again or check the prompt/input")]
    EmptyResponse,
}
