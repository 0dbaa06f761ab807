use dto::error::ErrorResponse;
use rocket::http::Status;
use rocket::serde::json::{Value, json};
use thiserror::Error;

pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
}

pub fn error_response<S: Into<String>>(status: Status, message: S) -> (Status, Value) {
    (status, json!(ErrorResponse::new(message)))
}
