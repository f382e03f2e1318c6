//! Fallback catalog behavior

mod common;

use std::sync::Arc;

use common::{event, live_settings, MockStore};
use kinloom_sdk::{
    catalog, ContentKind, ContentQuery, ContentService, PageSource, Settings, SortKey,
};

/// With an unreachable network, every content type serves its fallback
/// catalog unchanged.
#[tokio::test]
async fn test_unreachable_network_serves_catalog_for_all_types() {
    let service = ContentService::new(live_settings(), Arc::new(MockStore::unreachable()));
    let query = ContentQuery::new().with_limit(100);

    let cultures = service.cultures(&query).await;
    assert!(cultures.is_fallback());
    assert_eq!(
        ids(&cultures.items, |c| c.id.clone()),
        ids(&catalog::cultures(), |c| c.id.clone())
    );

    let exhibitions = service.exhibitions(&query).await;
    assert!(exhibitions.is_fallback());
    assert_eq!(exhibitions.items.len(), catalog::exhibitions().len());

    let artifacts = service.artifacts(&query).await;
    assert!(artifacts.is_fallback());
    assert_eq!(artifacts.items.len(), catalog::artifacts().len());

    let resources = service.resources(&query).await;
    assert!(resources.is_fallback());
    assert_eq!(resources.items.len(), catalog::resources().len());

    let stories = service.elder_stories(&query).await;
    assert!(stories.is_fallback());
    assert_eq!(stories.items.len(), catalog::elder_stories().len());

    let contributors = service.contributors(&query).await;
    assert_eq!(contributors.items.len(), catalog::contributors().len());

    let contributions = service.contributions(&query).await;
    assert_eq!(contributions.items.len(), catalog::contributions().len());

    let events = service.community_events(&query).await;
    assert_eq!(events.items.len(), catalog::community_events().len());

    let labels = service.labels(&query).await;
    assert_eq!(labels.items.len(), catalog::labels().len());
}

/// The documented example: page 1, limit 3, sort popular for cultures with
/// the static catalog returns exactly the three seeded records in catalog
/// order.
#[tokio::test]
async fn test_seeded_cultures_page_one_limit_three_popular() {
    let service = ContentService::offline(Settings::default());
    let query = ContentQuery::new()
        .sorted_by(SortKey::Popular)
        .with_page(1)
        .with_limit(3);

    let page = service.cultures(&query).await;

    assert_eq!(page.source, PageSource::Fallback);
    assert_eq!(page.items.len(), 3);
    let seeded = catalog::cultures();
    for (got, want) in page.items.iter().zip(seeded.iter()) {
        assert_eq!(got.id, want.id);
    }
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
}

/// Network configured off: the store is never consulted, catalog wins even
/// though the store holds live events.
#[tokio::test]
async fn test_disabled_network_serves_catalog() {
    let store = MockStore::new();
    store.insert(event(
        ContentKind::Culture,
        "culture-live",
        "agent-live",
        serde_json::json!({ "name": "Live Culture" }),
    ));

    let service = ContentService::new(Settings::default(), Arc::new(store));
    let page = service.cultures(&ContentQuery::new()).await;

    assert!(page.is_fallback());
    assert!(page.items.iter().all(|c| c.id != "culture-live"));
}

/// A live query that returns zero events degrades to the catalog.
#[tokio::test]
async fn test_empty_live_result_serves_catalog() {
    let service = ContentService::new(live_settings(), Arc::new(MockStore::new()));
    let page = service.cultures(&ContentQuery::new()).await;

    assert!(page.is_fallback());
    assert_eq!(page.items.len(), catalog::cultures().len());
}

/// A batch in which nothing decodes is a malformed response and degrades.
#[tokio::test]
async fn test_malformed_batch_serves_catalog() {
    let store = MockStore::new();
    store.insert(event(
        ContentKind::Culture,
        "culture-bad",
        "agent-1",
        serde_json::json!("not an object"),
    ));

    let service = ContentService::new(live_settings(), Arc::new(store));
    let page = service.cultures(&ContentQuery::new()).await;

    assert!(page.is_fallback());
}

/// A healthy store with decodable events serves live records.
#[tokio::test]
async fn test_live_events_are_served() {
    let store = MockStore::new();
    store.insert(event(
        ContentKind::Culture,
        "culture-live",
        "agent-live",
        serde_json::json!({
            "name": "Live Culture",
            "summary": "Fresh from the network",
            "region": "Testing Grounds",
        }),
    ));

    let service = ContentService::new(live_settings(), Arc::new(store));
    let page = service.cultures(&ContentQuery::new()).await;

    assert_eq!(page.source, PageSource::Live);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "culture-live");
}

/// Undecodable events are skipped when at least one record decodes.
#[tokio::test]
async fn test_partial_decode_keeps_good_events() {
    let store = MockStore::new();
    store.insert(event(
        ContentKind::Culture,
        "culture-bad",
        "agent-1",
        serde_json::json!(42),
    ));
    store.insert(event(
        ContentKind::Culture,
        "culture-good",
        "agent-1",
        serde_json::json!({ "name": "Good Culture" }),
    ));

    let service = ContentService::new(live_settings(), Arc::new(store));
    let page = service.cultures(&ContentQuery::new()).await;

    assert_eq!(page.source, PageSource::Live);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "culture-good");
}

fn ids<T, F: Fn(&T) -> String>(records: &[T], f: F) -> Vec<String> {
    records.iter().map(f).collect()
}
