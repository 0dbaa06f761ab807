use crate::summary::summarizer::Summarizer;
use crate::web::error::{INVALID_REQUEST, error_response};
use dto::transcript::TranscriptRequest;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{self, Json, Value, json};

/// Summarize a meeting transcript: a brief summary, key action points and decisions made.
#[post("/parse-transcript", data = "<transcript_request>")]
pub async fn parse_transcript(
    summarizer: &State<Summarizer>,
    transcript_request: Result<Json<TranscriptRequest>, json::Error<'_>>,
) -> (Status, Value) {
    let transcript_request = match transcript_request {
        Ok(transcript_request) => transcript_request.into_inner(),
        Err(error) => {
            debug!("Transcript request can't be read [error: {error:?}]");
            return error_response(Status::BadRequest, INVALID_REQUEST);
        }
    };

    match summarizer.summarize(transcript_request.content()).await {
        Ok(summary) => (Status::Ok, json!(summary)),
        Err(error) => {
            error!("Transcript can't be summarized\n{error:#?}");
            error_response(Status::InternalServerError, error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarizer::tests::{get_summarizer, setup_completion};
    use dto::error::ErrorResponse;
    use dto::transcript::TranscriptSummary;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn get_client(mock_server: &MockServer) -> Client {
        let rocket = rocket::build()
            .manage(get_summarizer(mock_server))
            .mount("/api/", routes![parse_transcript]);
        Client::tracked(rocket).await.unwrap()
    }

    #[async_test]
    async fn should_summarize_transcript() {
        let mock_server = MockServer::start().await;
        setup_completion(&mock_server, "Ship on Monday.").await;
        let client = get_client(&mock_server).await;
        let body = json!(TranscriptRequest::new("Alice: ship on Monday?".to_owned())).to_string();

        let response = client
            .post("/api/parse-transcript")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;

        assert_eq!(Status::Ok, response.status());
        let summary: TranscriptSummary = response.into_json().await.unwrap();
        assert_eq!(TranscriptSummary::new("Ship on Monday.".to_owned()), summary);
    }

    #[async_test]
    async fn should_summarize_transcript_without_content_type() {
        let mock_server = MockServer::start().await;
        setup_completion(&mock_server, "Ship on Monday.").await;
        let client = get_client(&mock_server).await;
        let body = json!(TranscriptRequest::new("Alice: ship on Monday?".to_owned())).to_string();

        let response = client
            .post("/api/parse-transcript")
            .body(body)
            .dispatch()
            .await;

        assert_eq!(Status::Ok, response.status());
    }

    #[async_test]
    async fn should_fail_when_completion_is_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;
        let client = get_client(&mock_server).await;
        let body = json!(TranscriptRequest::new("Alice: ship on Monday?".to_owned())).to_string();

        let response = client
            .post("/api/parse-transcript")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;

        assert_eq!(Status::InternalServerError, response.status());
        let error: ErrorResponse = response.into_json().await.unwrap();
        assert_eq!(
            ErrorResponse::new("OpenAI response was empty. Try again or check the prompt/input"),
            error
        );
    }

    #[async_test]
    async fn should_reject_malformed_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;
        let client = get_client(&mock_server).await;

        let response = client
            .post("/api/parse-transcript")
            .header(ContentType::JSON)
            .body(r#"{"text": "Alice: ship on Monday?"}"#)
            .dispatch()
            .await;

        assert_eq!(Status::BadRequest, response.status());
        let error: ErrorResponse = response.into_json().await.unwrap();
        assert_eq!(ErrorResponse::new(INVALID_REQUEST), error);
    }
}
