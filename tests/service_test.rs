//! Protocol filtering, single-record lookups, and the contribution flow

mod common;

use std::sync::Arc;

use common::{event, live_settings, MockStore};
use kinloom_sdk::{
    ContentKind, ContentQuery, ContentService, ContributionDraft, CulturalProtocol, DraftPriority,
    ProtocolEnforcer, SdkError, Settings,
};

fn story_store() -> MockStore {
    let store = MockStore::new();
    store.insert(event(
        ContentKind::ElderStory,
        "story-open",
        "agent-1",
        serde_json::json!({ "title": "Open story", "protocol": "open" }),
    ));
    store.insert(event(
        ContentKind::ElderStory,
        "story-community",
        "agent-1",
        serde_json::json!({ "title": "Community story", "protocol": "community" }),
    ));
    store.insert(event(
        ContentKind::ElderStory,
        "story-elders",
        "agent-2",
        serde_json::json!({ "title": "Elders story", "protocol": "elders" }),
    ));
    store
}

/// An anonymous viewer never receives a record above the open level.
#[tokio::test]
async fn test_anonymous_viewer_sees_open_only() {
    let service = ContentService::new(live_settings(), Arc::new(story_store()));
    let page = service.elder_stories(&ContentQuery::new()).await;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "story-open");
}

#[tokio::test]
async fn test_member_viewer_sees_community() {
    let service = ContentService::new(live_settings(), Arc::new(story_store()))
        .with_enforcer(ProtocolEnforcer::member());
    let page = service.elder_stories(&ContentQuery::new()).await;

    let ids: Vec<&str> = page.items.iter().map(|s| s.id.as_str()).collect();
    assert!(ids.contains(&"story-open"));
    assert!(ids.contains(&"story-community"));
    assert!(!ids.contains(&"story-elders"));
}

/// Looking up a restricted record directly is denied, not hidden.
#[tokio::test]
async fn test_restricted_lookup_is_denied() {
    let service = ContentService::new(live_settings(), Arc::new(story_store()));
    let result = service.elder_story("story-elders").await;
    assert!(matches!(result, Err(SdkError::AccessDenied { .. })));
}

#[tokio::test]
async fn test_clearance_from_settings() {
    let settings = Settings {
        network_enabled: true,
        viewer_clearance: CulturalProtocol::Elders,
        ..Default::default()
    };
    let service = ContentService::new(settings, Arc::new(story_store()));
    let page = service.elder_stories(&ContentQuery::new()).await;
    assert_eq!(page.items.len(), 3);
}

/// Live lookup falls through to the catalog when the record is not on the
/// network.
#[tokio::test]
async fn test_get_falls_back_to_catalog() {
    let service = ContentService::new(live_settings(), Arc::new(MockStore::unreachable()));
    let culture = service.culture("culture-tesshi").await.unwrap();
    assert_eq!(culture.name, "Tesshi Islanders");

    let missing = service.culture("culture-nowhere").await;
    assert!(matches!(missing, Err(SdkError::NotFound(_))));
}

#[tokio::test]
async fn test_network_status_reflects_store_health() {
    let store = Arc::new(MockStore::new());
    let service = ContentService::new(live_settings(), store.clone());

    let status = service.network_status().await;
    assert!(status.enabled);
    assert!(status.healthy);

    store.set_unreachable(true);
    let status = service.network_status().await;
    assert!(status.enabled);
    assert!(!status.healthy);
}

/// Drafts queue offline and publish once the network is back.
#[tokio::test]
async fn test_contribution_queue_and_flush() {
    let store = Arc::new(MockStore::new());
    let service = ContentService::new(live_settings(), store.clone());

    let draft = ContributionDraft::new(
        "Grandmother's net song",
        "story",
        "culture-tesshi",
        "member-9",
        serde_json::json!({ "notes": "with translation" }),
    );
    service.submit_contribution(draft).await.unwrap();
    assert_eq!(service.outbox().pending().await, 1);

    let report = service.flush_contributions().await.unwrap();
    assert_eq!(report.published, 1);
    assert_eq!(report.requeued, 0);
    assert_eq!(store.published_count(), 1);
    assert_eq!(service.outbox().pending().await, 0);
}

/// Flushing against an unreachable store requeues the drafts.
#[tokio::test]
async fn test_flush_requeues_on_failure() {
    let store = Arc::new(MockStore::unreachable());
    let service = ContentService::new(live_settings(), store.clone());

    let draft = ContributionDraft::new(
        "Photos of the east marker",
        "artifact",
        "culture-varda",
        "member-3",
        serde_json::json!({}),
    )
    .with_priority(DraftPriority::Urgent);
    service.submit_contribution(draft).await.unwrap();

    let report = service.flush_contributions().await.unwrap();
    assert_eq!(report.published, 0);
    assert_eq!(report.requeued, 1);
    assert_eq!(service.outbox().pending().await, 1);
}

/// Queueing works with the network disabled; only flushing requires it.
#[tokio::test]
async fn test_offline_queue_flush_denied() {
    let service = ContentService::offline(Settings::default());

    let draft = ContributionDraft::new(
        "A correction",
        "correction",
        "culture-senna",
        "member-1",
        serde_json::json!({}),
    );
    service.submit_contribution(draft).await.unwrap();
    assert_eq!(service.outbox().pending().await, 1);

    let result = service.flush_contributions().await;
    assert!(matches!(result, Err(SdkError::NetworkDisabled)));
}
