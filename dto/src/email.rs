use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Deserializer, Serialize};

/// A batch of identical emails to send, one per address in `emails`.
#[derive(Debug, Getters, Dissolve, Serialize, Deserialize, PartialEq, Clone)]
pub struct EmailRequest {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    emails: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    subject: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    body: String,
}

/// Absent and `null` fields both read as the type's default.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmailRequest {
    pub fn new(emails: Vec<String>, subject: String, body: String) -> Self {
        Self {
            emails,
            subject,
            body,
        }
    }
}

/// Delivery status of a single recipient.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct EmailResult {
    email: String,
    status: String,
    success: bool,
}

impl EmailResult {
    pub fn new(email: String, status: String, success: bool) -> Self {
        Self {
            email,
            status,
            success,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct EmailResponse {
    results: Vec<EmailResult>,
    message: String,
}

impl EmailResponse {
    pub fn new(results: Vec<EmailResult>, message: String) -> Self {
        Self { results, message }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const TEST_SUBJECT: &str = "Meeting minutes";
    pub const TEST_BODY: &str = "Here is what we agreed on today.";

    pub fn get_email_request(emails: &[&str]) -> EmailRequest {
        EmailRequest::new(
            emails.iter().map(|email| (*email).to_owned()).collect(),
            TEST_SUBJECT.to_owned(),
            TEST_BODY.to_owned(),
        )
    }

    #[test]
    fn should_deserialize_email_request() {
        let json = r#"{"emails": ["a@x.com", "b@x.com"], "subject": "Meeting minutes", "body": "Here is what we agreed on today."}"#;

        let request: EmailRequest = serde_json::from_str(json).unwrap();

        assert_eq!(get_email_request(&["a@x.com", "b@x.com"]), request);
    }

    #[test]
    fn should_deserialize_email_request_without_subject() {
        let json = r#"{"emails": ["a@x.com"], "body": "Hello"}"#;

        let request: EmailRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            EmailRequest::new(vec!["a@x.com".to_owned()], String::new(), "Hello".to_owned()),
            request
        );
    }

    #[test]
    fn should_deserialize_email_request_with_null_emails() {
        let json = r#"{"emails": null, "subject": "Meeting minutes"}"#;

        let request: EmailRequest = serde_json::from_str(json).unwrap();

        assert!(request.emails().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn should_serialize_email_response() {
        let response = EmailResponse::new(
            vec![EmailResult::new(
                "a@x.com".to_owned(),
                "sent successfully".to_owned(),
                true,
            )],
            "Successfully sent to 1/1 recipients".to_owned(),
        );

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            serde_json::json!({
                "results": [{"email": "a@x.com", "status": "sent successfully", "success": true}],
                "message": "Successfully sent to 1/1 recipients"
            }),
            json
        );
    }
}
