//! Elder story records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

use super::{filter_eq, tags_match, text_matches, AuthorRef, ContentRecord};

/// An elder story: recorded oral history with an optional transcript.
///
/// Stories are the most protocol-sensitive content on the platform; many
/// are published at `community` or `elders` level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElderStory {
    pub id: String,
    pub title: String,
    pub summary: String,

    /// Name of the elder telling the story
    pub narrator: String,

    /// Culture this story belongs to, by id
    pub culture: String,

    /// Language the story is told in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Recording length in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,

    /// Written transcript, when the community has approved one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: recorded listens
    #[serde(default)]
    pub listen_count: u32,
}

impl ContentRecord for ElderStory {
    fn kind() -> ContentKind {
        ContentKind::ElderStory
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn popularity(&self) -> u64 {
        self.listen_count as u64
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

        let duration_minutes = event
            .payload
            .get("duration_minutes")
            .and_then(|v| v.as_u64())
            .map(|v| v as u32);

        Ok(Self {
            id: event.id.clone(),
            title: event.field_str("title", ""),
            summary: event.field_str("summary", ""),
            narrator: event.field_str("narrator", ""),
            culture: event.field_str("culture", ""),
            language: event.field_opt_str("language"),
            duration_minutes,
            audio_url: event.field_opt_str("audio_url"),
            transcript: event.field_opt_str("transcript"),
            tags: event.field_list("tags"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            listen_count: event.field_u32("listen_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::elder_stories()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
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
            if !text_matches(search, &[&self.title, &self.summary, &self.narrator]) {
                return false;
            }
        }
        true
    }
}
