//! Exhibition and artifact records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

use super::{filter_eq, tags_match, text_matches, AuthorRef, ContentRecord};

/// A curated exhibition of artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exhibition {
    pub id: String,
    pub title: String,
    pub summary: String,

    /// Culture this exhibition belongs to, by id
    pub culture: String,

    /// Historical era covered, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: artifacts in this exhibition
    #[serde(default)]
    pub artifact_count: u32,

    /// Rollup: recorded visits
    #[serde(default)]
    pub visit_count: u32,
}

impl ContentRecord for Exhibition {
    fn kind() -> ContentKind {
        ContentKind::Exhibition
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn popularity(&self) -> u64 {
        self.visit_count as u64 + self.artifact_count as u64
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn protocol(&self) -> CulturalProtocol {
        self.protocol
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
            era: event.field_opt_str("era"),
            cover_image: event.field_opt_str("cover_image"),
            tags: event.field_list("tags"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            artifact_count: event.field_u32("artifact_count"),
            visit_count: event.field_u32("visit_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::exhibitions()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
            return false;
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

/// A single artifact within an exhibition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Exhibition this artifact appears in, by id
    pub exhibition: String,

    /// Culture of origin, by id
    pub culture: String,

    /// Material or medium (textile, carving, recording, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    /// Provenance note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for Artifact {
    fn kind() -> ContentKind {
        ContentKind::Artifact
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn protocol(&self) -> CulturalProtocol {
        self.protocol
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
            description: event.field_str("description", ""),
            exhibition: event.field_str("exhibition", ""),
            culture: event.field_str("culture", ""),
            medium: event.field_opt_str("medium"),
            provenance: event.field_opt_str("provenance"),
            image: event.field_opt_str("image"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::artifacts()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
            return false;
        }
        if let Some(ref category) = query.category {
            match &self.medium {
                Some(medium) if medium.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }
        if let Some(ref search) = query.search {
            if !text_matches(search, &[&self.title, &self.description]) {
                return false;
            }
        }
        true
    }
}
