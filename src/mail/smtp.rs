use crate::mail::configuration::SmtpConfiguration;
use crate::mail::error::TransportError;
use crate::mail::error::TransportError::{CantConnectToSmtpServer, CantSendMessage, Rejected};
use crate::mail::transport::MailTransport;
use log::debug;
use mail_send::{SmtpClient, SmtpClientBuilder};
use mail_send::mail_builder::MessageBuilder;
use rocket::tokio::io::{AsyncRead, AsyncWrite};

/// Delivers emails through an authenticated SMTP relay.
/// A new session is opened for every email and closed right after.
pub struct SmtpTransport {
    configuration: SmtpConfiguration,
}

impl SmtpTransport {
    pub fn new(configuration: SmtpConfiguration) -> Self {
        Self { configuration }
    }

    fn create_message<'a>(
        &'a self,
        to: &'a str,
        subject: &'a str,
        body: &'a str,
    ) -> MessageBuilder<'a> {
        let sender_address = self.configuration.login().as_str();
        let message = MessageBuilder::new();
        let message = match self.configuration.sender_name() {
            Some(sender_name) => message.from((sender_name.as_str(), sender_address)),
            None => message.from(sender_address),
        };

        message.to(to).subject(subject).text_body(body)
    }
}

#[rocket::async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        let message = self.create_message(to, subject, body);
        let smtp_client = SmtpClientBuilder::new(
            self.configuration.server().as_str(),
            *self.configuration.port(),
        )
        .implicit_tls(false)
        .timeout(*self.configuration.timeout())
        .credentials((
            self.configuration.login().as_str(),
            self.configuration.password().as_str(),
        ))
        .connect()
        .await
        .map_err(|error| {
            debug!("Couldn't connect to SMTP server [recipient: {to}, error: {error:?}]");
            CantConnectToSmtpServer(error.to_string())
        })?;

        deliver(smtp_client, message, to).await
    }
}

/// Sends one message over an open session, then closes it.
async fn deliver<T: AsyncRead + AsyncWrite + Unpin>(
    mut smtp_client: SmtpClient<T>,
    message: MessageBuilder<'_>,
    to: &str,
) -> Result<(), TransportError> {
    smtp_client.send(message).await.map_err(|error| {
        debug!("Couldn't send message [recipient: {to}, error: {error:?}]");
        match error {
            mail_send::Error::UnexpectedReply(response) => Rejected(response.message),
            error => CantSendMessage(error.to_string()),
        }
    })?;

    // The message is already accepted, a failed QUIT doesn't change that.
    if let Err(error) = smtp_client.quit().await {
        debug!("Couldn't close SMTP session [recipient: {to}, error: {error:?}]");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::configuration::tests::get_test_configuration;
    use mail_send::mail_builder::mime::BodyPart;
    use rocket::tokio;
    use rocket::tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use std::net::TcpListener;

    const TEST_RECIPIENT: &str = "recipient@address.com";
    const TEST_SUBJECT: &str = "This is a subject";
    const TEST_TEXT_BODY: &str = "This is a slightly less important email";

    // region create_message
    #[test]
    fn should_create_message() {
        let transport = SmtpTransport::new(get_test_configuration("localhost", 25));

        let message = transport.create_message(TEST_RECIPIENT, TEST_SUBJECT, TEST_TEXT_BODY);

        match message.clone().text_body.unwrap().contents {
            BodyPart::Text(text) => assert_eq!(TEST_TEXT_BODY, text),
            BodyPart::Binary(_) => panic!("Unexpected binary part"),
            BodyPart::Multipart(_) => panic!("Unexpected multipart part"),
        };
        let raw_message = message.write_to_string().unwrap();
        assert!(raw_message.contains(TEST_RECIPIENT));
        assert!(raw_message.contains("sender@address.com"));
        assert!(raw_message.contains(&format!("Subject: {TEST_SUBJECT}")));
    }
    // endregion

    // region send
    #[async_test]
    async fn should_fail_to_send_when_server_is_unreachable() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport = SmtpTransport::new(get_test_configuration("127.0.0.1", port));

        let error = transport
            .send(TEST_RECIPIENT, TEST_SUBJECT, TEST_TEXT_BODY)
            .await
            .unwrap_err();

        assert!(matches!(error, CantConnectToSmtpServer(_)));
    }
    // endregion

    // region deliver
    /// Plain text relay recording the commands it receives until QUIT or disconnection.
    async fn start_relay(rcpt_reply: &'static str) -> (u16, tokio::task::JoinHandle<Vec<String>>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();
            let mut commands = vec![];
            writer.write_all(b"220 localhost ready\r\n").await.unwrap();
            while let Some(line) = lines.next_line().await.unwrap() {
                let command = line.split(' ').next().unwrap_or_default().to_uppercase();
                commands.push(command.clone());
                let reply = match command.as_str() {
                    "EHLO" => "250 localhost\r\n",
                    "RCPT" => rcpt_reply,
                    "DATA" => {
                        writer.write_all(b"354 go ahead\r\n").await.unwrap();
                        while let Some(line) = lines.next_line().await.unwrap() {
                            if line == "." {
                                break;
                            }
                        }
                        "250 queued\r\n"
                    }
                    "QUIT" => "221 bye\r\n",
                    _ => "250 OK\r\n",
                };
                writer.write_all(reply.as_bytes()).await.unwrap();
                if command == "QUIT" {
                    break;
                }
            }
            commands
        });
        (port, handle)
    }

    async fn connect(port: u16) -> SmtpClient<tokio::net::TcpStream> {
        SmtpClientBuilder::new("127.0.0.1", port)
            .connect_plain()
            .await
            .unwrap()
    }

    #[async_test]
    async fn should_close_session_after_sending() {
        let (port, relay) = start_relay("250 OK\r\n").await;
        let transport = SmtpTransport::new(get_test_configuration("127.0.0.1", port));
        let message = transport.create_message(TEST_RECIPIENT, TEST_SUBJECT, TEST_TEXT_BODY);

        let result = deliver(connect(port).await, message, TEST_RECIPIENT).await;

        assert_eq!(Ok(()), result);
        assert_eq!(
            vec!["EHLO", "MAIL", "RCPT", "DATA", "QUIT"],
            relay.await.unwrap()
        );
    }

    #[async_test]
    async fn should_report_rejected_recipient() {
        let (port, relay) = start_relay("550 mailbox unavailable\r\n").await;
        let transport = SmtpTransport::new(get_test_configuration("127.0.0.1", port));
        let message = transport.create_message(TEST_RECIPIENT, TEST_SUBJECT, TEST_TEXT_BODY);

        let result = deliver(connect(port).await, message, TEST_RECIPIENT).await;

        assert!(matches!(result, Err(Rejected(_))));
        assert_eq!(vec!["EHLO", "MAIL", "RCPT"], relay.await.unwrap());
    }
    // endregion
}
