//! Two-phase fetch and one-shot render.

use std::time::Instant;

use futures::future::try_join_all;
use tracing::info;

use crate::client::TaskStoreClient;
use crate::error::Result;
use crate::models::TaskRecord;
use crate::render;
use crate::view::{self, Node};

/// Drives one bootstrap pass: fetch the task index, fan out a detail fetch
/// per identifier, join, compose, render.
///
/// There is no retry and no partial-results fallback: a failure in either
/// fetch phase aborts the pass and nothing renders. Re-running the program
/// is the only refresh mechanism.
pub struct Sequencer<'a> {
    client: &'a TaskStoreClient,
}

impl<'a> Sequencer<'a> {
    pub fn new(client: &'a TaskStoreClient) -> Self {
        Self { client }
    }

    /// Fetch the full task snapshot.
    ///
    /// Detail fetches run concurrently; the assembled sequence preserves
    /// the identifier order of the index response. If any single fetch
    /// fails the whole join fails.
    pub async fn fetch_snapshot(&self) -> Result<Vec<TaskRecord>> {
        let start = Instant::now();
        let task_arns = self.client.list_tasks().await?;
        info!(
            task_count = task_arns.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "task index fetched"
        );

        let start = Instant::now();
        let records = try_join_all(
            task_arns
                .iter()
                .map(|task_arn| self.client.describe_task(task_arn)),
        )
        .await?;
        info!(
            task_count = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "task details fetched"
        );

        Ok(records)
    }

    /// Fetch, compose, and write the dashboard to stdout exactly once.
    ///
    /// Returns the composed tree so callers can enumerate its controls.
    pub async fn run(&self) -> Result<Node> {
        let records = self.fetch_snapshot().await?;
        let tree = view::cluster_card(&records);
        print!("{}", render::render(&tree));

        let instance_count = match &tree {
            Node::Cluster { children } => children.len(),
            _ => 0,
        };
        info!(
            task_count = records.len(),
            instance_count = instance_count,
            "dashboard rendered"
        );
        Ok(tree)
    }
}
