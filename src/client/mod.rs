//! Event store clients
//!
//! [`EventStore`] is the seam to the decentralized event network. The
//! aggregation service takes it as an injected `Arc<dyn EventStore>`, so any
//! backend (the gateway HTTP API, a local index, a test double) can stand in.

use async_trait::async_trait;

use crate::error::Result;
use crate::event::{ContentKind, EventBatch, NetworkEvent, QueryOptions};

#[cfg(feature = "gateway")]
mod gateway;

#[cfg(feature = "gateway")]
pub use gateway::GatewayClient;

/// Read/write access to the decentralized event network.
///
/// Timeouts and retry policy live behind this trait; the aggregation
/// service never retries beyond its single catalog fallback.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Query events of a kind. `options.limit == 0` requests a count only.
    async fn query(&self, kind: ContentKind, options: QueryOptions) -> Result<EventBatch>;

    /// Publish an event to the network
    async fn publish(&self, event: NetworkEvent) -> Result<()>;

    /// Whether the store currently answers requests
    async fn healthy(&self) -> bool;
}
