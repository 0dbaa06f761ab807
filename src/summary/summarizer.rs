use crate::summary::configuration::LlmConfiguration;
use crate::summary::error::SummaryError;
use crate::summary::error::SummaryError::{
    ConnectionFailed, EmptyResponse, MalformedResponse, UnexpectedStatus,
};
use crate::summary::prompt::build_prompt;
use dto::transcript::TranscriptSummary;
use log::debug;
use reqwest::Client;
use rocket::serde::json;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Turns meeting transcripts into summaries through a chat completion API.
pub struct Summarizer {
    client: Client,
    configuration: LlmConfiguration,
}

impl Summarizer {
    pub fn new(client: Client, configuration: LlmConfiguration) -> Self {
        Self {
            client,
            configuration,
        }
    }

    pub async fn summarize(&self, transcript: &str) -> Result<TranscriptSummary, SummaryError> {
        let request = ChatCompletionRequest {
            model: self.configuration.model(),
            messages: vec![ChatMessage {
                role: "user".to_owned(),
                content: build_prompt(transcript),
            }],
        };

        let response = self
            .client
            .post(self.configuration.api_url().as_str())
            .bearer_auth(self.configuration.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|error| ConnectionFailed(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ConnectionFailed(error.to_string()))?;
        debug!("Completion API raw response [status: {status}, body: {body}]");

        if !status.is_success() {
            return Err(UnexpectedStatus(status.as_u16()));
        }

        let response: ChatCompletionResponse =
            json::from_str(&body).map_err(|error| MalformedResponse(error.to_string()))?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| TranscriptSummary::new(choice.message.content))
            .ok_or(EmptyResponse)
    }
}
