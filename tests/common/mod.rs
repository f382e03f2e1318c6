//! Shared test support: an in-memory event store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use kinloom_sdk::{
    ContentKind, EventBatch, EventStore, NetworkEvent, QueryOptions, Result, SdkError, Settings,
};

/// In-memory event store for driving the aggregation service in tests.
///
/// Can be flipped unreachable to exercise the fallback path.
pub struct MockStore {
    events: Mutex<HashMap<String, Vec<NetworkEvent>>>,
    published: Mutex<Vec<NetworkEvent>>,
    unreachable: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
            published: Mutex::new(Vec::new()),
            unreachable: AtomicBool::new(false),
        }
    }

    pub fn unreachable() -> Self {
        let store = Self::new();
        store.unreachable.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_unreachable(&self, value: bool) {
        self.unreachable.store(value, Ordering::SeqCst);
    }

    pub fn insert(&self, event: NetworkEvent) {
        self.events
            .lock()
            .unwrap()
            .entry(event.kind.clone())
            .or_default()
            .push(event);
    }

    pub fn published_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

#[async_trait]
impl EventStore for MockStore {
    async fn query(&self, kind: ContentKind, options: QueryOptions) -> Result<EventBatch> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(SdkError::NetworkUnavailable("connection refused".into()));
        }

        let all = self
            .events
            .lock()
            .unwrap()
            .get(kind.as_str())
            .cloned()
            .unwrap_or_default();

        let total = Some(all.len() as u64);
        let events = all
            .into_iter()
            .take(options.limit as usize)
            .collect();

        Ok(EventBatch { events, total })
    }

    async fn publish(&self, event: NetworkEvent) -> Result<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(SdkError::NetworkUnavailable("connection refused".into()));
        }
        self.published.lock().unwrap().push(event);
        Ok(())
    }

    async fn healthy(&self) -> bool {
        !self.unreachable.load(Ordering::SeqCst)
    }
}

/// Settings with live fetching switched on
pub fn live_settings() -> Settings {
    Settings {
        network_enabled: true,
        ..Default::default()
    }
}

/// Build an event with a fixed id
pub fn event(kind: ContentKind, id: &str, author: &str, payload: serde_json::Value) -> NetworkEvent {
    let mut event = NetworkEvent::new(kind, author, payload);
    event.id = id.to_string();
    event
}
