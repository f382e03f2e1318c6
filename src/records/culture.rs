//! Culture records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

use super::{filter_eq, tags_match, text_matches, AuthorRef, ContentRecord};

/// A culture profile
///
/// The root entity of the platform: exhibitions, resources, and elder
/// stories all reference a culture by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    /// Network-level identifier
    pub id: String,

    /// Culture name
    pub name: String,

    /// Short introduction shown on listing cards
    pub summary: String,

    /// Geographic region or homeland description
    pub region: String,

    /// Languages spoken, primary first
    #[serde(default)]
    pub languages: Vec<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Optional hero image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    /// Publishing agent
    pub author: AuthorRef,

    /// Visibility level
    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: exhibitions referencing this culture
    #[serde(default)]
    pub exhibition_count: u32,

    /// Rollup: resources referencing this culture
    #[serde(default)]
    pub resource_count: u32,

    /// Rollup: elder stories referencing this culture
    #[serde(default)]
    pub story_count: u32,
}

impl ContentRecord for Culture {
    fn kind() -> ContentKind {
        ContentKind::Culture
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn popularity(&self) -> u64 {
        self.exhibition_count as u64 + self.resource_count as u64 + self.story_count as u64
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn protocol(&self) -> CulturalProtocol {
        self.protocol
    }

    fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(|s| s.as_str())
    }

    fn author(&self) -> &AuthorRef {
        &self.author
    }

    fn from_event(event: &NetworkEvent) -> Result<Self> {
        event.payload_object()?;

        let protocol = event
            .field_opt_str("protocol")
            .and_then(|s| CulturalProtocol::from_str(&s))
            .unwrap_or_default();

        Ok(Self {
            id: event.id.clone(),
            name: event.field_str("name", ""),
            summary: event.field_str("summary", ""),
            region: event.field_str("region", ""),
            languages: event.field_list("languages"),
            tags: event.field_list("tags"),
            hero_image: event.field_opt_str("hero_image"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            exhibition_count: event.field_u32("exhibition_count"),
            resource_count: event.field_u32("resource_count"),
            story_count: event.field_u32("story_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::cultures()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.id) {
            return false;
        }
        if let Some(ref language) = query.language {
            if !self
                .languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(language))
            {
                return false;
            }
        }
        if !tags_match(&query.tags, &self.tags) {
            return false;
        }
        if let Some(ref search) = query.search {
            if !text_matches(search, &[&self.name, &self.summary, &self.region]) {
                return false;
            }
        }
        true
    }
}
