use crate::web::error::error_response;
use rocket::Request;
use rocket::http::Status;
use rocket::serde::json::Value;

/// Every error status the API answers with comes along a JSON body.
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Value) {
    error_response(status, status.reason().unwrap_or("Unknown error"))
}
