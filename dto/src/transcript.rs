use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct TranscriptRequest {
    content: String,
}

impl TranscriptRequest {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

/// Summary generated out of a meeting transcript.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct TranscriptSummary {
    summary: String,
}

impl TranscriptSummary {
    pub fn new(summary: String) -> Self {
        Self { summary }
    }
}
