use crate::dispatch::configuration::DispatchMode;
use crate::dispatch::outcome::{DispatchSummary, RecipientOutcome};
use crate::dispatch::request::DispatchRequest;
use crate::mail::transport::MailTransport;
use log::{debug, info, warn};
use rocket::futures::future::join_all;
use uuid::Uuid;

/// Sends the same email to every recipient of a batch, one transport call per recipient.
///
/// A failed delivery is recorded as a failed outcome and never stops the batch:
/// [BatchDispatcher::dispatch] always returns a summary with one outcome per recipient,
/// in the order recipients were given.
pub struct BatchDispatcher {
    transport: Box<dyn MailTransport>,
    mode: DispatchMode,
}

impl BatchDispatcher {
    pub fn new(transport: Box<dyn MailTransport>, mode: DispatchMode) -> Self {
        Self { transport, mode }
    }

    pub async fn dispatch(&self, request: &DispatchRequest) -> DispatchSummary {
        let batch_id = Uuid::new_v4();
        debug!(
            "Dispatching batch [batch: {batch_id}, recipients: {}, mode: {:?}]",
            request.recipients().len(),
            self.mode
        );

        let outcomes = match self.mode {
            DispatchMode::Sequential => {
                let mut outcomes = Vec::with_capacity(request.recipients().len());
                for address in request.recipients() {
                    outcomes.push(self.attempt(&batch_id, address, request).await);
                }
                outcomes
            }
            // `join_all` yields outputs in the order of its input futures, whatever their completion order.
            DispatchMode::Concurrent => {
                join_all(
                    request
                        .recipients()
                        .iter()
                        .map(|address| self.attempt(&batch_id, address, request)),
                )
                .await
            }
        };

        let summary = DispatchSummary::new(outcomes);
        info!(
            "Batch dispatched [batch: {batch_id}, sent: {}/{}]",
            summary.success_count(),
            summary.total_count()
        );
        summary
    }

    async fn attempt(
        &self,
        batch_id: &Uuid,
        address: &str,
        request: &DispatchRequest,
    ) -> RecipientOutcome {
        match self
            .transport
            .send(address, request.subject(), request.body())
            .await
        {
            Ok(()) => RecipientOutcome::sent(address.to_owned()),
            Err(error) => {
                warn!("Email has not been sent [batch: {batch_id}, recipient: {address}, error: {error}]");
                RecipientOutcome::failed(address.to_owned(), &error)
            }
        }
    }
}
