use crate::dispatch::dispatcher::BatchDispatcher;
use crate::dispatch::request::DispatchRequest;
use crate::web::error::{INVALID_REQUEST, error_response};
use dto::email::{EmailRequest, EmailResponse};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{self, Json, Value, json};

/// Send the same email to every address of the batch.
/// Deliveries that fail don't fail the request:
/// each recipient gets its own status within the results, along with a global message.
/// Only a batch with no recipient or too many of them is rejected, before anything is sent.
#[post("/send-email", data = "<email_request>")]
pub async fn send_email(
    batch_dispatcher: &State<BatchDispatcher>,
    email_request: Result<Json<EmailRequest>, json::Error<'_>>,
) -> (Status, Value) {
    let email_request = match email_request {
        Ok(email_request) => email_request.into_inner(),
        Err(error) => {
            debug!("Email request can't be read [error: {error:?}]");
            return error_response(Status::BadRequest, INVALID_REQUEST);
        }
    };

    let dispatch_request = match DispatchRequest::try_from(email_request) {
        Ok(dispatch_request) => dispatch_request,
        Err(error) => {
            debug!("Email request rejected [error: {error}]");
            return error_response(Status::BadRequest, error.to_string());
        }
    };

    let summary = batch_dispatcher.dispatch(&dispatch_request).await;
    (Status::Ok, json!(EmailResponse::from(summary)))
}
