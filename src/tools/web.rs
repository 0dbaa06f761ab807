use crate::web::error::WebError;
use crate::web::error::WebError::CantCreateClient;
use crate::tools::log_message_and_return;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub fn build_client() -> Result<Client, WebError> {
    reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
