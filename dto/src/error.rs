use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned alongside any non-successful status.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
        }
    }
}
