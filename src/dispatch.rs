//! Fire-and-forget dispatch of view actions.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::TaskStoreClient;
use crate::models::UpdateRequest;

/// Sends a view action to the task store and drops the outcome.
///
/// Any transport, status, or decode failure is reduced to `None` after a
/// warn-level log event; nothing propagates to the caller and nothing is
/// retried. The rendered view is never refreshed from here — observing the
/// effect of an update requires a fresh bootstrap run.
pub struct Dispatcher<'a> {
    client: &'a TaskStoreClient,
}

impl<'a> Dispatcher<'a> {
    pub fn new(client: &'a TaskStoreClient) -> Self {
        Self { client }
    }

    pub async fn update_task(&self, task_arn: &str, update: &UpdateRequest) -> Option<Value> {
        match self.client.update_task(task_arn, update).await {
            Ok(body) => {
                debug!(task_arn = %task_arn, "task update acknowledged");
                Some(body)
            }
            Err(e) => {
                warn!(task_arn = %task_arn, error = %e, "task update dropped");
                None
            }
        }
    }
}
