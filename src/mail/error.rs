use thiserror::Error;

/// Failure of a single delivery attempt.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum TransportError {
    #[error("Can't connect to SMTP server: {0}")]
    CantConnectToSmtpServer(String),
    #[error("Can't send message: {0}")]
    CantSendMessage(String),
    #[error("{0}")]
    Rejected(String),
}
