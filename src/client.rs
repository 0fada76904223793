//! HTTP client for the remote task store.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{TaskIndex, TaskRecord, UpdateRequest};

/// Thin wrapper over the task store API.
///
/// The base address is an explicit constructor argument; there is no
/// ambient endpoint configuration. No request timeout is configured: a hung
/// store call stalls its caller.
pub struct TaskStoreClient {
    client: Client,
    base_url: String,
}

impl TaskStoreClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/tasks` — the identifiers of every known task.
    pub async fn list_tasks(&self) -> Result<Vec<String>> {
        let url = format!("{}/tasks", self.base_url);
        let index: TaskIndex = self.get_json(&url).await?;
        Ok(index.tasks)
    }

    /// `GET {base}/task/{arn}` — one task's full record.
    pub async fn describe_task(&self, task_arn: &str) -> Result<TaskRecord> {
        let url = self.task_url(task_arn);
        self.get_json(&url).await
    }

    /// `POST {base}/task/{arn}` — apply a partial update.
    ///
    /// The response shape is unspecified beyond being JSON; callers decide
    /// whether to surface or drop it.
    pub async fn update_task(&self, task_arn: &str, update: &UpdateRequest) -> Result<Value> {
        let url = self.task_url(task_arn);
        debug!(url = %url, "posting task update");
        let response = self.client.post(&url).json(update).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, url });
        }
        Ok(response.json().await?)
    }

    fn task_url(&self, task_arn: &str) -> String {
        format!("{}/task/{}", self.base_url, task_arn)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "fetching from task store");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}
