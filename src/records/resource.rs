//! Learning resource records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

use super::{filter_eq, tags_match, text_matches, AuthorRef, ContentRecord};

/// A learning resource (lesson, recipe, craft guide, language material, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub summary: String,

    /// Culture this resource belongs to, by id
    pub culture: String,

    /// Resource category (lesson, recipe, craft, language, history, ...)
    pub category: String,

    /// Delivery format (article, video, audio, pdf)
    pub format: String,

    /// Language of the material, if not the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Where the material lives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: recorded downloads or views
    #[serde(default)]
    pub download_count: u32,
}

impl ContentRecord for Resource {
    fn kind() -> ContentKind {
        ContentKind::Resource
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn popularity(&self) -> u64 {
        self.download_count as u64
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn protocol(&self) -> CulturalProtocol {
        self.protocol
    }

    fn primary_language(&self) -> Option<&str> {
        self.language.as_deref()
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
            title: event.field_str("title", ""),
            summary: event.field_str("summary", ""),
            culture: event.field_str("culture", ""),
            category: event.field_str("category", "lesson"),
            format: event.field_str("format", "article"),
            language: event.field_opt_str("language"),
            url: event.field_opt_str("url"),
            tags: event.field_list("tags"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            download_count: event.field_u32("download_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::resources()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
            return false;
        }
        if !filter_eq(&query.category, &self.category) {
            return false;
        }
        if let Some(ref language) = query.language {
            match &self.language {
                Some(have) if have.eq_ignore_ascii_case(language) => {}
                _ => return false,
            }
        }
        if !tags_match(&query.tags, &self.tags) {
            return false;
        }
        if let Some(ref search) = query.search {
            if !text_matches(search, &[&self.title, &self.summary]) {
                return false;
            }
        }
        true
    }
}
