//! Content aggregation service
//!
//! Translates domain queries into bounded network scans, normalizes raw
//! events into typed records, and paginates client-side. Every fetch failure
//! degrades to the static catalog: the read path has no fatal errors, because
//! the product rule is "always show something".
//!
//! ## Approximation
//!
//! Listings and statistics derive from a scan of at most [`SCAN_LIMIT`]
//! events per kind. Totals are therefore capped at the scan bound; this is a
//! documented approximation, not an accurate network-wide count.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::EventStore;
use crate::config::Settings;
use crate::error::{Result, SdkError};
use crate::event::{ContentKind, EventBatch, QueryOptions};
use crate::outbox::{ContributionDraft, ContributionOutbox, FlushReport};
use crate::protocol::ProtocolEnforcer;
use crate::query::{ContentQuery, Page, PageSource, SortKey};
use crate::records::{
    Artifact, CommunityEvent, ContentRecord, Contribution, Contributor, Culture, ElderStory,
    Exhibition, Label, Resource,
};

mod stats;

pub use stats::PlatformStats;
use stats::DistinctSets;

/// Upper bound on events fetched per kind for listings and statistics
pub const SCAN_LIMIT: u32 = 100;

/// Network integration status for conditional UI
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct NetworkStatus {
    /// Whether live fetching is configured on
    pub enabled: bool,
    /// Whether the store answered the last health probe
    pub healthy: bool,
}

/// The content aggregation service.
///
/// Construct with an injected [`EventStore`] (or [`ContentService::offline`]
/// for catalog-only use) and hand it to the view layer.
pub struct ContentService {
    settings: Settings,
    store: Option<Arc<dyn EventStore>>,
    enforcer: ProtocolEnforcer,
    outbox: ContributionOutbox,
}

impl ContentService {
    /// Create a service backed by the given store
    pub fn new(settings: Settings, store: Arc<dyn EventStore>) -> Self {
        let enforcer = ProtocolEnforcer::new(settings.viewer_clearance);
        Self {
            settings,
            store: Some(store),
            enforcer,
            outbox: ContributionOutbox::default(),
        }
    }

    /// Create a catalog-only service (no store at all)
    pub fn offline(settings: Settings) -> Self {
        let enforcer = ProtocolEnforcer::new(settings.viewer_clearance);
        Self {
            settings,
            store: None,
            enforcer,
            outbox: ContributionOutbox::default(),
        }
    }

    /// Replace the protocol enforcer (e.g. after the viewer authenticates)
    pub fn with_enforcer(mut self, enforcer: ProtocolEnforcer) -> Self {
        self.enforcer = enforcer;
        self
    }

    /// The contribution outbox
    pub fn outbox(&self) -> &ContributionOutbox {
        &self.outbox
    }

    // =========================================================================
    // Listings
    // =========================================================================

    pub async fn cultures(&self, query: &ContentQuery) -> Page<Culture> {
        self.list(query).await
    }

    pub async fn exhibitions(&self, query: &ContentQuery) -> Page<Exhibition> {
        self.list(query).await
    }

    pub async fn artifacts(&self, query: &ContentQuery) -> Page<Artifact> {
        self.list(query).await
    }

    pub async fn resources(&self, query: &ContentQuery) -> Page<Resource> {
        self.list(query).await
    }

    pub async fn elder_stories(&self, query: &ContentQuery) -> Page<ElderStory> {
        self.list(query).await
    }

    pub async fn contributors(&self, query: &ContentQuery) -> Page<Contributor> {
        self.list(query).await
    }

    pub async fn contributions(&self, query: &ContentQuery) -> Page<Contribution> {
        self.list(query).await
    }

    pub async fn community_events(&self, query: &ContentQuery) -> Page<CommunityEvent> {
        self.list(query).await
    }

    pub async fn labels(&self, query: &ContentQuery) -> Page<Label> {
        self.list(query).await
    }

    /// Generic listing for any content record type
    pub async fn list<T: ContentRecord>(&self, query: &ContentQuery) -> Page<T> {
        let (page, limit) = query.window();
        match self.scan::<T>(query).await {
            Ok(records) => Page::from_records(records, page, limit, PageSource::Live),
            Err(SdkError::NetworkDisabled) => {
                debug!(kind = %T::kind(), "Network disabled, serving catalog");
                self.fallback_page(query, page, limit)
            }
            Err(e) => {
                warn!(kind = %T::kind(), error = %e, "Live query failed, serving catalog");
                self.fallback_page(query, page, limit)
            }
        }
    }

    // =========================================================================
    // Single records
    // =========================================================================

    pub async fn culture(&self, id: &str) -> Result<Culture> {
        self.get(id).await
    }

    pub async fn exhibition(&self, id: &str) -> Result<Exhibition> {
        self.get(id).await
    }

    pub async fn resource(&self, id: &str) -> Result<Resource> {
        self.get(id).await
    }

    pub async fn elder_story(&self, id: &str) -> Result<ElderStory> {
        self.get(id).await
    }

    /// Look up a single record by id.
    ///
    /// Tries the live scan first, then the catalog; unlike listings this can
    /// return `NotFound`, and protocol checks apply to the found record.
    pub async fn get<T: ContentRecord>(&self, id: &str) -> Result<T> {
        if let Ok(store) = self.live_store() {
            match store.query(T::kind(), QueryOptions::with_limit(SCAN_LIMIT)).await {
                Ok(batch) => {
                    if let Some(record) = decode_batch::<T>(&batch)
                        .into_iter()
                        .find(|r| r.record_id() == id)
                    {
                        self.enforcer.check(record.protocol())?;
                        return Ok(record);
                    }
                }
                Err(e) => {
                    warn!(kind = %T::kind(), id = id, error = %e, "Live lookup failed, trying catalog");
                }
            }
        }

        let record = T::fallback_catalog()
            .into_iter()
            .find(|r| r.record_id() == id)
            .ok_or_else(|| SdkError::NotFound(format!("{}/{}", T::kind(), id)))?;
        self.enforcer.check(record.protocol())?;
        Ok(record)
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Platform-wide statistics for the landing page.
    ///
    /// The four type counts are fetched concurrently and joined; distinct
    /// language and contributor counts are derived from the scanned records.
    pub async fn platform_stats(&self) -> PlatformStats {
        match self.live_stats().await {
            Ok(stats) => stats,
            Err(SdkError::NetworkDisabled) => {
                debug!("Network disabled, deriving stats from catalog");
                self.catalog_stats()
            }
            Err(e) => {
                warn!(error = %e, "Live stats failed, deriving from catalog");
                self.catalog_stats()
            }
        }
    }

    async fn live_stats(&self) -> Result<PlatformStats> {
        let store = self.live_store()?;
        let options = || QueryOptions::with_limit(SCAN_LIMIT);

        // Independent reads, issued concurrently and joined before use
        let (cultures, exhibitions, resources, stories) = futures::join!(
            store.query(ContentKind::Culture, options()),
            store.query(ContentKind::Exhibition, options()),
            store.query(ContentKind::Resource, options()),
            store.query(ContentKind::ElderStory, options()),
        );
        let (cultures, exhibitions, resources, stories) =
            (cultures?, exhibitions?, resources?, stories?);

        let culture_records = self.visible(decode_batch::<Culture>(&cultures));
        let exhibition_records = self.visible(decode_batch::<Exhibition>(&exhibitions));
        let resource_records = self.visible(decode_batch::<Resource>(&resources));
        let story_records = self.visible(decode_batch::<ElderStory>(&stories));

        let mut sets = DistinctSets::default();
        sets.observe(&culture_records);
        sets.observe(&exhibition_records);
        sets.observe(&resource_records);
        sets.observe(&story_records);

        Ok(PlatformStats {
            cultures: cultures.total_or_len(),
            exhibitions: exhibitions.total_or_len(),
            resources: resources.total_or_len(),
            elder_stories: stories.total_or_len(),
            unique_languages: sets.unique_languages(),
            unique_contributors: sets.unique_contributors(),
            records_scanned: sets.records_scanned(),
            source: PageSource::Live,
        })
    }

    fn catalog_stats(&self) -> PlatformStats {
        let cultures = self.visible(Culture::fallback_catalog());
        let exhibitions = self.visible(Exhibition::fallback_catalog());
        let resources = self.visible(Resource::fallback_catalog());
        let stories = self.visible(ElderStory::fallback_catalog());

        let mut sets = DistinctSets::default();
        sets.observe(&cultures);
        sets.observe(&exhibitions);
        sets.observe(&resources);
        sets.observe(&stories);

        PlatformStats {
            cultures: cultures.len() as u64,
            exhibitions: exhibitions.len() as u64,
            resources: resources.len() as u64,
            elder_stories: stories.len() as u64,
            unique_languages: sets.unique_languages(),
            unique_contributors: sets.unique_contributors(),
            records_scanned: sets.records_scanned(),
            source: PageSource::Fallback,
        }
    }

    // =========================================================================
    // Network status and contributions
    // =========================================================================

    /// Whether live fetching is on and the store answers
    pub async fn network_status(&self) -> NetworkStatus {
        match self.live_store() {
            Ok(store) => NetworkStatus {
                enabled: true,
                healthy: store.healthy().await,
            },
            Err(_) => NetworkStatus {
                enabled: false,
                healthy: false,
            },
        }
    }

    /// Queue a contribution draft. Works regardless of network state.
    pub async fn submit_contribution(&self, draft: ContributionDraft) -> Result<()> {
        self.outbox.queue(draft).await
    }

    /// Publish queued contribution drafts through the store
    pub async fn flush_contributions(&self) -> Result<FlushReport> {
        let store = self.live_store()?;
        Ok(self.outbox.flush(store.as_ref()).await)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn live_store(&self) -> Result<&Arc<dyn EventStore>> {
        if !self.settings.network_enabled {
            return Err(SdkError::NetworkDisabled);
        }
        self.store.as_ref().ok_or(SdkError::NetworkDisabled)
    }

    /// Fetch and normalize the bounded superset for a kind
    async fn scan<T: ContentRecord>(&self, query: &ContentQuery) -> Result<Vec<T>> {
        let store = self.live_store()?;
        let options = QueryOptions {
            limit: SCAN_LIMIT,
            search: query.search.clone(),
            tags: query.tags.clone(),
            since: None,
        };

        let batch = store.query(T::kind(), options).await?;
        if batch.events.is_empty() {
            return Err(SdkError::EmptyResult(T::kind().to_string()));
        }

        let records = decode_batch::<T>(&batch);
        if records.is_empty() {
            return Err(SdkError::MalformedResponse(format!(
                "no {} event decoded",
                T::kind()
            )));
        }

        Ok(self.prepare(records, query))
    }

    /// Visibility filter, query filter, then sort
    fn prepare<T: ContentRecord>(&self, records: Vec<T>, query: &ContentQuery) -> Vec<T> {
        let mut records: Vec<T> = records
            .into_iter()
            .filter(|r| self.enforcer.can_view(r.protocol()) && r.matches(query))
            .collect();
        sort_records(&mut records, query.sort);
        records
    }

    fn visible<T: ContentRecord>(&self, records: Vec<T>) -> Vec<T> {
        records
            .into_iter()
            .filter(|r| self.enforcer.can_view(r.protocol()))
            .collect()
    }

    fn fallback_page<T: ContentRecord>(
        &self,
        query: &ContentQuery,
        page: u32,
        limit: u32,
    ) -> Page<T> {
        let records = self.prepare(T::fallback_catalog(), query);
        Page::from_records(records, page, limit, PageSource::Fallback)
    }
}

/// Decode a batch leniently, skipping events that fail field checks
fn decode_batch<T: ContentRecord>(batch: &EventBatch) -> Vec<T> {
    batch
        .events
        .iter()
        .filter_map(|event| match T::from_event(event) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(event = %event.id, error = %e, "Skipping undecodable event");
                None
            }
        })
        .collect()
}

/// Stable sort; ties keep their incoming (catalog or network) order
fn sort_records<T: ContentRecord>(records: &mut [T], sort: SortKey) {
    match sort {
        SortKey::Popular => records.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
        SortKey::Recent => records.sort_by(|a, b| b.updated_at().cmp(&a.updated_at())),
        SortKey::Alphabetical => records.sort_by(|a, b| {
            a.display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[tokio::test]
    async fn test_offline_service_serves_catalog() {
        let service = ContentService::offline(Settings::default());
        let page = service.cultures(&ContentQuery::new()).await;

        assert!(page.is_fallback());
        assert_eq!(page.items.len(), catalog::cultures().len());
    }

    #[tokio::test]
    async fn test_offline_network_status() {
        let service = ContentService::offline(Settings::default());
        let status = service.network_status().await;
        assert!(!status.enabled);
        assert!(!status.healthy);
    }

    #[tokio::test]
    async fn test_offline_get_not_found() {
        let service = ContentService::offline(Settings::default());
        let result = service.culture("culture-missing").await;
        assert!(matches!(result, Err(SdkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_offline_stats_from_catalog() {
        let service = ContentService::offline(Settings::default());
        let stats = service.platform_stats().await;

        assert_eq!(stats.source, PageSource::Fallback);
        assert_eq!(stats.cultures, 3);
        assert!(stats.unique_languages <= stats.records_scanned);
        assert!(stats.unique_contributors <= stats.records_scanned);
    }

    #[tokio::test]
    async fn test_flush_requires_network() {
        let service = ContentService::offline(Settings::default());
        let result = service.flush_contributions().await;
        assert!(matches!(result, Err(SdkError::NetworkDisabled)));
    }
}
