//! Kinloom SDK - Cultural Heritage Content Client
//!
//! Typed, paginated access to content on the Kinloom decentralized
//! cultural-heritage network: cultures, exhibitions, artifacts, learning
//! resources, elder stories, contributors, contributions, community events,
//! and labels.
//!
//! # Architecture
//!
//! The SDK normalizes raw network events into typed records and aggregates
//! them client-side. When the network is disabled, unreachable, or returns
//! garbage, every listing degrades to a built-in seed catalog - the read
//! path never hard-fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinloom_sdk::{ContentQuery, ContentService, GatewayClient, Settings, SortKey};
//! use std::sync::Arc;
//!
//! let settings = Settings::from_env();
//! let store = Arc::new(GatewayClient::new(&settings));
//! let service = ContentService::new(settings, store);
//!
//! // First page of cultures, most popular first
//! let page = service
//!     .cultures(&ContentQuery::new().sorted_by(SortKey::Popular))
//!     .await;
//!
//! for culture in &page.items {
//!     println!("{} ({})", culture.name, culture.region);
//! }
//!
//! // Landing-page statistics, counts fetched concurrently
//! let stats = service.platform_stats().await;
//! println!("{} cultures, {} languages", stats.cultures, stats.unique_languages);
//! ```

// Static fallback catalog
pub mod catalog;

// Event store clients
pub mod client;

// Environment-driven settings
pub mod config;

// Error types
pub mod error;

// Raw network event model
pub mod event;

// Contribution outbox
pub mod outbox;

// Cultural protocol access levels
pub mod protocol;

// Domain queries and pagination
pub mod query;

// Typed content records
pub mod records;

// Content aggregation service
pub mod service;

// Re-export the service surface
pub use service::{ContentService, NetworkStatus, PlatformStats, SCAN_LIMIT};

// Re-export query types
pub use query::{ContentQuery, Page, PageSource, Pagination, SortKey};

// Re-export record types
pub use records::{
    Artifact, AuthorRef, CommunityEvent, ContentRecord, Contribution, Contributor, Culture,
    ElderStory, Exhibition, Label, Resource,
};

// Re-export client types
pub use client::EventStore;

#[cfg(feature = "gateway")]
pub use client::GatewayClient;

// Re-export event types
pub use event::{ContentKind, EventBatch, NetworkEvent, QueryOptions};

// Re-export outbox types
pub use outbox::{ContributionDraft, ContributionOutbox, DraftPriority, FlushReport, OutboxConfig};

// Re-export protocol types
pub use protocol::{CulturalProtocol, ProtocolEnforcer};

// Re-export config and error types
pub use config::Settings;
pub use error::{Result, SdkError};
