use crate::mail::error::TransportError;
use derive_getters::Getters;
use dto::email::{EmailResponse, EmailResult};

pub const SENT_SUCCESSFULLY: &str = "sent successfully";

/// What happened to one recipient of a batch.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct RecipientOutcome {
    address: String,
    succeeded: bool,
    detail: String,
}

impl RecipientOutcome {
    pub fn sent(address: String) -> Self {
        Self {
            address,
            succeeded: true,
            detail: SENT_SUCCESSFULLY.to_owned(),
        }
    }

    pub fn failed(address: String, error: &TransportError) -> Self {
        Self {
            address,
            succeeded: false,
            detail: error.to_string(),
        }
    }
}

/// Outcomes of a whole batch, in the order recipients were given.
/// Counts are derived from the outcomes, so that they can't disagree.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct DispatchSummary {
    outcomes: Vec<RecipientOutcome>,
    success_count: usize,
    total_count: usize,
}

impl DispatchSummary {
    pub fn new(outcomes: Vec<RecipientOutcome>) -> Self {
        let success_count = outcomes.iter().filter(|outcome| outcome.succeeded).count();
        let total_count = outcomes.len();
        Self {
            outcomes,
            success_count,
            total_count,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Successfully sent to {}/{} recipients",
            self.success_count, self.total_count
        )
    }
}

impl From<DispatchSummary> for EmailResponse {
    fn from(summary: DispatchSummary) -> Self {
        let message = summary.message();
        let results = summary
            .outcomes
            .into_iter()
            .map(|outcome| EmailResult::new(outcome.address, outcome.detail, outcome.succeeded))
            .collect();
        EmailResponse::new(results, message)
    }
}
