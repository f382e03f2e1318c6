//! Contribution outbox with backpressure protection
//!
//! The contribution form submits drafts through here rather than straight to
//! the network, so that:
//! - drafts queue even while the network is disabled or unreachable
//! - repeated edits deduplicate (last-write-wins per draft id)
//! - flushing batches by priority and signals backpressure when full

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::client::EventStore;
use crate::error::{Result, SdkError};
use crate::event::{ContentKind, NetworkEvent};

/// Draft priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DraftPriority {
    /// Corrections and takedown requests, flush first
    Urgent = 0,
    /// Regular contributions
    Normal = 1,
    /// Bulk imports
    Bulk = 2,
}

impl Default for DraftPriority {
    fn default() -> Self {
        Self::Normal
    }
}

/// A contribution draft queued for publishing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionDraft {
    /// Draft identifier; also the dedup key
    pub id: String,
    /// Contribution title
    pub title: String,
    /// What is being contributed (story, artifact, resource, correction)
    pub kind: String,
    /// Culture the contribution concerns, by id
    pub culture: String,
    /// Free-form body fields
    pub body: serde_json::Value,
    /// Submitting agent identifier
    pub submitted_by: String,
    /// Priority level
    pub priority: DraftPriority,
    /// When the draft was queued
    pub queued_at: DateTime<Utc>,
}

impl ContributionDraft {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        culture: impl Into<String>,
        submitted_by: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind: kind.into(),
            culture: culture.into(),
            body,
            submitted_by: submitted_by.into(),
            priority: DraftPriority::Normal,
            queued_at: Utc::now(),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: DraftPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Build the network event this draft publishes as
    pub fn into_event(self) -> NetworkEvent {
        let mut event = NetworkEvent::new(
            ContentKind::Contribution,
            self.submitted_by,
            json!({
                "title": self.title,
                "kind": self.kind,
                "culture": self.culture,
                "status": "submitted",
                "body": self.body,
            }),
        );
        event.id = self.id;
        event
    }
}

/// Configuration for the outbox
#[derive(Debug, Clone)]
pub struct OutboxConfig {
    /// Maximum drafts in the queue before rejecting
    pub max_size: usize,
    /// High watermark for backpressure signaling (0-100)
    pub high_watermark: u8,
    /// Batch size for flush operations
    pub batch_size: usize,
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            max_size: 500,
            high_watermark: 80,
            batch_size: 25,
        }
    }
}

/// Result of a flush operation
#[derive(Debug, Clone, Default)]
pub struct FlushReport {
    /// Drafts successfully published
    pub published: usize,
    /// Drafts that failed and were requeued
    pub requeued: usize,
    /// Error messages for failed drafts
    pub errors: Vec<String>,
}

/// Priority-batched, deduplicating contribution queue
pub struct ContributionOutbox {
    config: OutboxConfig,
    /// Drafts by priority, deduplicated by draft id
    queues: Arc<Mutex<HashMap<DraftPriority, HashMap<String, ContributionDraft>>>>,
}

impl ContributionOutbox {
    /// Create an outbox with the given configuration
    pub fn new(config: OutboxConfig) -> Self {
        let mut queues = HashMap::new();
        queues.insert(DraftPriority::Urgent, HashMap::new());
        queues.insert(DraftPriority::Normal, HashMap::new());
        queues.insert(DraftPriority::Bulk, HashMap::new());

        Self {
            config,
            queues: Arc::new(Mutex::new(queues)),
        }
    }

    /// Queue a draft.
    ///
    /// A draft with the same id replaces the queued one (last-write-wins).
    pub async fn queue(&self, draft: ContributionDraft) -> Result<()> {
        let mut queues = self.queues.lock().await;
        let total: usize = queues.values().map(|q| q.len()).sum();

        if total >= self.config.max_size {
            return Err(SdkError::OutboxFull(100));
        }

        let priority = draft.priority;
        if let Some(queue) = queues.get_mut(&priority) {
            queue.insert(draft.id.clone(), draft);
        }

        Ok(())
    }

    /// Current backpressure level (0-100)
    pub async fn backpressure(&self) -> u8 {
        let queues = self.queues.lock().await;
        let total: usize = queues.values().map(|q| q.len()).sum();
        let percentage = (total as f64 / self.config.max_size as f64 * 100.0) as u8;
        percentage.min(100)
    }

    /// Whether the queue is above its high watermark
    pub async fn should_flush(&self) -> bool {
        self.backpressure().await >= self.config.high_watermark
    }

    /// Pending draft count across priorities
    pub async fn pending(&self) -> usize {
        let queues = self.queues.lock().await;
        queues.values().map(|q| q.len()).sum()
    }

    /// Take a batch of drafts, highest priority first
    pub async fn take_batch(&self) -> Vec<ContributionDraft> {
        let mut queues = self.queues.lock().await;
        let mut batch = Vec::new();

        for priority in [
            DraftPriority::Urgent,
            DraftPriority::Normal,
            DraftPriority::Bulk,
        ] {
            if let Some(queue) = queues.get_mut(&priority) {
                let keys: Vec<String> = queue
                    .keys()
                    .take(self.config.batch_size - batch.len())
                    .cloned()
                    .collect();
                for key in keys {
                    if let Some(draft) = queue.remove(&key) {
                        batch.push(draft);
                    }
                }
            }
            if batch.len() >= self.config.batch_size {
                break;
            }
        }

        batch
    }

    /// Publish a batch of drafts through the store.
    ///
    /// Failed drafts are requeued; the flush itself never fails once the
    /// batch is taken.
    pub async fn flush(&self, store: &dyn EventStore) -> FlushReport {
        let batch = self.take_batch().await;
        let mut report = FlushReport::default();

        for draft in batch {
            let retry = draft.clone();
            match store.publish(draft.into_event()).await {
                Ok(()) => report.published += 1,
                Err(e) => {
                    warn!(draft = %retry.id, error = %e, "Draft publish failed, requeueing");
                    report.errors.push(e.to_string());
                    report.requeued += 1;
                    // Requeue best-effort; a full queue drops the draft
                    if self.queue(retry).await.is_err() {
                        report.requeued -= 1;
                    }
                }
            }
        }

        report
    }

    /// Drop all pending drafts
    pub async fn clear(&self) {
        let mut queues = self.queues.lock().await;
        for queue in queues.values_mut() {
            queue.clear();
        }
    }

    /// Get the outbox configuration
    pub fn config(&self) -> &OutboxConfig {
        &self.config
    }
}

impl Default for ContributionOutbox {
    fn default() -> Self {
        Self::new(OutboxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, priority: DraftPriority) -> ContributionDraft {
        let mut d = ContributionDraft::new(
            format!("Draft {}", id),
            "story",
            "culture-tesshi",
            "member-1",
            serde_json::json!({}),
        )
        .with_priority(priority);
        d.id = id.to_string();
        d
    }

    #[tokio::test]
    async fn test_queue_and_take_priority_order() {
        let outbox = ContributionOutbox::default();

        outbox.queue(draft("a", DraftPriority::Normal)).await.unwrap();
        outbox.queue(draft("b", DraftPriority::Urgent)).await.unwrap();

        let batch = outbox.take_batch().await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, "b");
    }

    #[tokio::test]
    async fn test_deduplication_last_write_wins() {
        let outbox = ContributionOutbox::default();

        let mut first = draft("a", DraftPriority::Normal);
        first.title = "Version 1".to_string();
        let mut second = draft("a", DraftPriority::Normal);
        second.title = "Version 2".to_string();

        outbox.queue(first).await.unwrap();
        outbox.queue(second).await.unwrap();

        let batch = outbox.take_batch().await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title, "Version 2");
    }

    #[tokio::test]
    async fn test_backpressure() {
        let outbox = ContributionOutbox::new(OutboxConfig {
            max_size: 10,
            high_watermark: 50,
            ..Default::default()
        });

        for i in 0..5 {
            outbox
                .queue(draft(&format!("d{}", i), DraftPriority::Normal))
                .await
                .unwrap();
        }

        assert_eq!(outbox.backpressure().await, 50);
        assert!(outbox.should_flush().await);
    }

    #[tokio::test]
    async fn test_full_outbox_rejects() {
        let outbox = ContributionOutbox::new(OutboxConfig {
            max_size: 1,
            ..Default::default()
        });

        outbox.queue(draft("a", DraftPriority::Normal)).await.unwrap();
        let err = outbox.queue(draft("b", DraftPriority::Normal)).await;
        assert!(matches!(err, Err(SdkError::OutboxFull(_))));
    }

    #[test]
    fn test_draft_into_event() {
        let d = draft("net-song", DraftPriority::Normal);
        let event = d.into_event();
        assert_eq!(event.id, "net-song");
        assert_eq!(event.kind, "contribution");
        assert_eq!(event.payload["status"], "submitted");
    }
}
