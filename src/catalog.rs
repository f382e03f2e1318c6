//! Static fallback catalog
//!
//! Seed records served whenever the live network is disabled or a query
//! fails. Vectors are in stable catalog order; cultures are seeded with
//! descending popularity so the default sort preserves that order. All
//! seeds are published at the open protocol level.

use chrono::{DateTime, Utc};

use crate::records::{
    Artifact, AuthorRef, CommunityEvent, Contribution, Contributor, Culture, ElderStory,
    Exhibition, Label, Resource,
};

fn seeded_at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn keeper_amara() -> AuthorRef {
    AuthorRef::new("keeper-amara", "Amara Sel")
}

fn keeper_joram() -> AuthorRef {
    AuthorRef::new("keeper-joram", "Joram Eil")
}

fn keeper_noa() -> AuthorRef {
    AuthorRef::new("keeper-noa", "Noa Brandt")
}

/// Seeded cultures, most popular first
pub fn cultures() -> Vec<Culture> {
    vec![
        Culture {
            id: "culture-tesshi".to_string(),
            name: "Tesshi Islanders".to_string(),
            summary: "Seafaring weavers of the eastern archipelago, keepers of the tide songs."
                .to_string(),
            region: "Eastern Archipelago".to_string(),
            languages: vec!["Tesshi".to_string(), "English".to_string()],
            tags: vec!["weaving".to_string(), "maritime".to_string()],
            hero_image: None,
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_690_000_000),
            updated_at: seeded_at(1_718_000_000),
            exhibition_count: 3,
            resource_count: 4,
            story_count: 5,
        },
        Culture {
            id: "culture-varda".to_string(),
            name: "Varda Highlands".to_string(),
            summary: "Herders and stone carvers of the northern range.".to_string(),
            region: "Northern Range".to_string(),
            languages: vec!["Vardic".to_string()],
            tags: vec!["carving".to_string(), "pastoral".to_string()],
            hero_image: None,
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_691_000_000),
            updated_at: seeded_at(1_716_000_000),
            exhibition_count: 2,
            resource_count: 3,
            story_count: 3,
        },
        Culture {
            id: "culture-senna".to_string(),
            name: "Senna River People".to_string(),
            summary: "Basket makers and river navigators of the southern delta.".to_string(),
            region: "Southern Delta".to_string(),
            languages: vec!["Senna".to_string(), "French".to_string()],
            tags: vec!["basketry".to_string(), "river".to_string()],
            hero_image: None,
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_692_000_000),
            updated_at: seeded_at(1_714_000_000),
            exhibition_count: 1,
            resource_count: 2,
            story_count: 2,
        },
    ]
}

/// Seeded exhibitions
pub fn exhibitions() -> Vec<Exhibition> {
    vec![
        Exhibition {
            id: "exhibition-tide-songs".to_string(),
            title: "Tide Songs and Sail Cloth".to_string(),
            summary: "How Tesshi weavers recorded navigation routes in pattern bands."
                .to_string(),
            culture: "culture-tesshi".to_string(),
            era: Some("1860-1940".to_string()),
            cover_image: None,
            tags: vec!["weaving".to_string(), "navigation".to_string()],
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_700_000_000),
            updated_at: seeded_at(1_717_500_000),
            artifact_count: 12,
            visit_count: 240,
        },
        Exhibition {
            id: "exhibition-standing-stones".to_string(),
            title: "The Standing Stones of Varda".to_string(),
            summary: "Carved waymarkers from the high pastures, documented in place."
                .to_string(),
            culture: "culture-varda".to_string(),
            era: Some("pre-1800".to_string()),
            cover_image: None,
            tags: vec!["carving".to_string()],
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_701_000_000),
            updated_at: seeded_at(1_715_000_000),
            artifact_count: 8,
            visit_count: 150,
        },
        Exhibition {
            id: "exhibition-delta-baskets".to_string(),
            title: "Baskets of the Delta".to_string(),
            summary: "Senna reed work from eel traps to ceremonial carriers.".to_string(),
            culture: "culture-senna".to_string(),
            era: None,
            cover_image: None,
            tags: vec!["basketry".to_string()],
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_702_000_000),
            updated_at: seeded_at(1_713_000_000),
            artifact_count: 6,
            visit_count: 90,
        },
    ]
}

/// Seeded artifacts
pub fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact {
            id: "artifact-pattern-band".to_string(),
            title: "Harbor-crossing pattern band".to_string(),
            description: "Sail-cloth band encoding the safe channel through the northern reef."
                .to_string(),
            exhibition: "exhibition-tide-songs".to_string(),
            culture: "culture-tesshi".to_string(),
            medium: Some("textile".to_string()),
            provenance: Some("Loaned by the Tesshi weavers' circle".to_string()),
            image: None,
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_703_000_000),
            updated_at: seeded_at(1_712_000_000),
        },
        Artifact {
            id: "artifact-waymarker".to_string(),
            title: "Third-pasture waymarker".to_string(),
            description: "Limestone marker carved with the spiral of the summer route."
                .to_string(),
            exhibition: "exhibition-standing-stones".to_string(),
            culture: "culture-varda".to_string(),
            medium: Some("carving".to_string()),
            provenance: None,
            image: None,
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_704_000_000),
            updated_at: seeded_at(1_711_000_000),
        },
        Artifact {
            id: "artifact-eel-trap".to_string(),
            title: "Winter eel trap".to_string(),
            description: "Double-walled reed trap used in the cold months.".to_string(),
            exhibition: "exhibition-delta-baskets".to_string(),
            culture: "culture-senna".to_string(),
            medium: Some("basketry".to_string()),
            provenance: Some("Made for the exhibition by Ila Senn".to_string()),
            image: None,
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_705_000_000),
            updated_at: seeded_at(1_710_000_000),
        },
    ]
}

/// Seeded learning resources
pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "resource-tesshi-weaving".to_string(),
            title: "Reading a pattern band".to_string(),
            summary: "Introductory lesson on the Tesshi pattern vocabulary.".to_string(),
            culture: "culture-tesshi".to_string(),
            category: "lesson".to_string(),
            format: "article".to_string(),
            language: Some("English".to_string()),
            url: None,
            tags: vec!["weaving".to_string()],
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_706_000_000),
            updated_at: seeded_at(1_717_000_000),
            download_count: 310,
        },
        Resource {
            id: "resource-vardic-phrases".to_string(),
            title: "Vardic greetings and herd calls".to_string(),
            summary: "Audio phrasebook recorded with three Varda families.".to_string(),
            culture: "culture-varda".to_string(),
            category: "language".to_string(),
            format: "audio".to_string(),
            language: Some("Vardic".to_string()),
            url: None,
            tags: vec!["language".to_string()],
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_707_000_000),
            updated_at: seeded_at(1_716_500_000),
            download_count: 180,
        },
        Resource {
            id: "resource-senna-reed".to_string(),
            title: "Harvesting reed without harming the bank".to_string(),
            summary: "Field guide to the Senna harvest rotation.".to_string(),
            culture: "culture-senna".to_string(),
            category: "craft".to_string(),
            format: "pdf".to_string(),
            language: Some("French".to_string()),
            url: None,
            tags: vec!["basketry".to_string(), "ecology".to_string()],
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_708_000_000),
            updated_at: seeded_at(1_715_500_000),
            download_count: 95,
        },
    ]
}

/// Seeded elder stories
pub fn elder_stories() -> Vec<ElderStory> {
    vec![
        ElderStory {
            id: "story-nine-crossings".to_string(),
            title: "The nine crossings".to_string(),
            summary: "Elder Mira Tesh recalls the first solo crossing of her girlhood."
                .to_string(),
            narrator: "Mira Tesh".to_string(),
            culture: "culture-tesshi".to_string(),
            language: Some("Tesshi".to_string()),
            duration_minutes: Some(24),
            audio_url: None,
            transcript: None,
            tags: vec!["maritime".to_string()],
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_709_000_000),
            updated_at: seeded_at(1_714_500_000),
            listen_count: 420,
        },
        ElderStory {
            id: "story-winter-count".to_string(),
            title: "Counting the winter herd".to_string(),
            summary: "Elder Osk Varda on the year the snow came early.".to_string(),
            narrator: "Osk Varda".to_string(),
            culture: "culture-varda".to_string(),
            language: Some("Vardic".to_string()),
            duration_minutes: Some(31),
            audio_url: None,
            transcript: None,
            tags: vec!["pastoral".to_string()],
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_709_500_000),
            updated_at: seeded_at(1_713_500_000),
            listen_count: 260,
        },
        ElderStory {
            id: "story-first-basket".to_string(),
            title: "Your first basket leaks".to_string(),
            summary: "Elder Ila Senn on teaching patience at the riverbank.".to_string(),
            narrator: "Ila Senn".to_string(),
            culture: "culture-senna".to_string(),
            language: Some("Senna".to_string()),
            duration_minutes: Some(18),
            audio_url: None,
            transcript: None,
            tags: vec!["basketry".to_string()],
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_710_000_000),
            updated_at: seeded_at(1_712_500_000),
            listen_count: 190,
        },
    ]
}

/// Seeded contributors
pub fn contributors() -> Vec<Contributor> {
    vec![
        Contributor {
            id: "keeper-amara".to_string(),
            display_name: "Amara Sel".to_string(),
            bio: Some("Weaver and archivist working with the Tesshi circle.".to_string()),
            cultures: vec!["culture-tesshi".to_string()],
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_689_000_000),
            updated_at: seeded_at(1_717_800_000),
            contribution_count: 14,
        },
        Contributor {
            id: "keeper-joram".to_string(),
            display_name: "Joram Eil".to_string(),
            bio: Some("Field documenter of the Varda waymarkers.".to_string()),
            cultures: vec!["culture-varda".to_string()],
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_689_500_000),
            updated_at: seeded_at(1_716_800_000),
            contribution_count: 9,
        },
        Contributor {
            id: "keeper-noa".to_string(),
            display_name: "Noa Brandt".to_string(),
            bio: None,
            cultures: vec!["culture-senna".to_string(), "culture-tesshi".to_string()],
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_690_500_000),
            updated_at: seeded_at(1_715_800_000),
            contribution_count: 6,
        },
    ]
}

/// Seeded contributions
pub fn contributions() -> Vec<Contribution> {
    vec![
        Contribution {
            id: "contribution-net-song".to_string(),
            title: "Grandmother's net song".to_string(),
            summary: "A work song sung while mending nets, with translation notes."
                .to_string(),
            kind: "story".to_string(),
            culture: "culture-tesshi".to_string(),
            status: "accepted".to_string(),
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_711_000_000),
            updated_at: seeded_at(1_712_000_000),
        },
        Contribution {
            id: "contribution-spiral-photo".to_string(),
            title: "Photographs of the east spiral marker".to_string(),
            summary: "Twelve photographs of weathering on the east pasture marker."
                .to_string(),
            kind: "artifact".to_string(),
            culture: "culture-varda".to_string(),
            status: "in_review".to_string(),
            author: keeper_joram(),
            protocol: Default::default(),
            created_at: seeded_at(1_713_000_000),
            updated_at: seeded_at(1_713_000_000),
        },
    ]
}

/// Seeded community events
pub fn community_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: "event-weaving-circle".to_string(),
            title: "Open weaving circle".to_string(),
            summary: "Monthly gathering for pattern band beginners.".to_string(),
            culture: "culture-tesshi".to_string(),
            venue: Some("Harbor hall, East Quay".to_string()),
            starts_at: seeded_at(1_726_000_000),
            ends_at: None,
            tags: vec!["weaving".to_string()],
            author: keeper_amara(),
            protocol: Default::default(),
            created_at: seeded_at(1_715_000_000),
            updated_at: seeded_at(1_715_000_000),
            rsvp_count: 32,
        },
        CommunityEvent {
            id: "event-delta-walk".to_string(),
            title: "Reed bank walk and harvest demonstration".to_string(),
            summary: "Guided walk along the winter harvest rotation.".to_string(),
            culture: "culture-senna".to_string(),
            venue: Some("South landing".to_string()),
            starts_at: seeded_at(1_727_000_000),
            ends_at: None,
            tags: vec!["ecology".to_string()],
            author: keeper_noa(),
            protocol: Default::default(),
            created_at: seeded_at(1_716_000_000),
            updated_at: seeded_at(1_716_000_000),
            rsvp_count: 18,
        },
    ]
}

/// Seeded labels
pub fn labels() -> Vec<Label> {
    vec![
        Label {
            id: "label-weaving".to_string(),
            name: "Weaving".to_string(),
            slug: "weaving".to_string(),
            author: keeper_amara(),
            created_at: seeded_at(1_688_000_000),
            updated_at: seeded_at(1_717_000_000),
            usage_count: 21,
        },
        Label {
            id: "label-basketry".to_string(),
            name: "Basketry".to_string(),
            slug: "basketry".to_string(),
            author: keeper_noa(),
            created_at: seeded_at(1_688_100_000),
            updated_at: seeded_at(1_716_000_000),
            usage_count: 13,
        },
        Label {
            id: "label-carving".to_string(),
            name: "Carving".to_string(),
            slug: "carving".to_string(),
            author: keeper_joram(),
            created_at: seeded_at(1_688_200_000),
            updated_at: seeded_at(1_715_000_000),
            usage_count: 11,
        },
        Label {
            id: "label-language".to_string(),
            name: "Language".to_string(),
            slug: "language".to_string(),
            author: keeper_joram(),
            created_at: seeded_at(1_688_300_000),
            updated_at: seeded_at(1_714_000_000),
            usage_count: 7,
        },
    ]
}
