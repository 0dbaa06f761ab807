use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Missing SMTP login, provide it with --smtp-login or GMAIL_EMAIL")]
    MissingSmtpLogin,
    #[error("Missing SMTP password, provide it with --smtp-password or GMAIL_PASS")]
    MissingSmtpPassword,
    #[error("Missing OpenAI API key, provide it with --openai-api-key or OPENAI_API_KEY")]
    MissingOpenAiApiKey,
    #[error("Unknown dispatch mode [mode: {0}]")]
    UnknownDispatchMode(String),
}
