use crate::tools::env_args::Setting;
use crate::tools::error::ConfigurationError;
use crate::tools::error::ConfigurationError::{MissingSmtpLogin, MissingSmtpPassword};
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

const SMTP_SERVER: Setting = Setting::new("--smtp-server", "SMTP_SERVER");
const SMTP_PORT: Setting = Setting::new("--smtp-port", "SMTP_PORT");
const SMTP_LOGIN: Setting = Setting::new("--smtp-login", "GMAIL_EMAIL");
const SMTP_PASSWORD: Setting = Setting::new("--smtp-password", "GMAIL_PASS");
const SMTP_TIMEOUT: Setting = Setting::new("--smtp-timeout", "SMTP_TIMEOUT");
const EMAIL_SENDER_NAME: Setting = Setting::new("--email-sender-name", "EMAIL_SENDER_NAME");
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT_IN_SECONDS: u64 = 30;

/// Everything needed to open an authenticated session onto the SMTP relay.
/// The login doubles as the sender address.
#[derive(Getters, Clone, PartialEq)]
pub struct SmtpConfiguration {
    server: String,
    port: u16,
    login: String,
    password: String,
    sender_name: Option<String>,
    timeout: Duration,
}

impl SmtpConfiguration {
    pub fn new(
        server: String,
        port: u16,
        login: String,
        password: String,
        sender_name: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            server,
            port,
            login,
            password,
            sender_name,
            timeout,
        }
    }

    pub fn load() -> Result<Self, ConfigurationError> {
        Ok(Self {
            server: SMTP_SERVER.value_or(DEFAULT_SMTP_SERVER),
            port: SMTP_PORT.parsed_value_or(DEFAULT_SMTP_PORT),
            login: SMTP_LOGIN.expected_value(MissingSmtpLogin)?,
            password: SMTP_PASSWORD.expected_value(MissingSmtpPassword)?,
            sender_name: EMAIL_SENDER_NAME.value(),
            timeout: Duration::from_secs(
                SMTP_TIMEOUT.parsed_value_or(DEFAULT_SMTP_TIMEOUT_IN_SECONDS),
            ),
        })
    }
}

impl Debug for SmtpConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SmtpConfiguration {{server={}, port={}, login={}, password=MASKED, sender_name={:?}, timeout={:?}}}",
            self.server, self.port, self.login, self.sender_name, self.timeout
        )
    }
}
