//! Community records: contributors, contributions, events, labels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

use super::{filter_eq, tags_match, text_matches, AuthorRef, ContentRecord};

/// A platform contributor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub id: String,
    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Cultures this contributor works with, by id
    #[serde(default)]
    pub cultures: Vec<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: accepted contributions
    #[serde(default)]
    pub contribution_count: u32,
}

impl ContentRecord for Contributor {
    fn kind() -> ContentKind {
        ContentKind::Contributor
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn popularity(&self) -> u64 {
        self.contribution_count as u64
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

        Ok(Self {
            id: event.id.clone(),
            display_name: event.field_str("display_name", ""),
            bio: event.field_opt_str("bio"),
            cultures: event.field_list("cultures"),
            author: AuthorRef::from_event(event),
            protocol: CulturalProtocol::Open,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            contribution_count: event.field_u32("contribution_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::contributors()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if let Some(ref culture) = query.culture {
            if !self.cultures.iter().any(|c| c.eq_ignore_ascii_case(culture)) {
                return false;
            }
        }
        if let Some(ref search) = query.search {
            let bio = self.bio.as_deref().unwrap_or("");
            if !text_matches(search, &[&self.display_name, bio]) {
                return false;
            }
        }
        true
    }
}

/// A submitted contribution awaiting review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: String,
    pub title: String,
    pub summary: String,

    /// What is being contributed (story, artifact, resource, correction)
    pub kind: String,

    /// Culture the contribution concerns, by id
    pub culture: String,

    /// Review status (submitted, in_review, accepted, declined)
    pub status: String,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for Contribution {
    fn kind() -> ContentKind {
        ContentKind::Contribution
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
            summary: event.field_str("summary", ""),
            kind: event.field_str("kind", "story"),
            culture: event.field_str("culture", ""),
            status: event.field_str("status", "submitted"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::contributions()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
            return false;
        }
        if !filter_eq(&query.category, &self.kind) {
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

/// A community gathering or workshop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub summary: String,

    /// Culture hosting the event, by id
    pub culture: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// When the event starts
    pub starts_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub author: AuthorRef,

    #[serde(default)]
    pub protocol: CulturalProtocol,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: announced attendees
    #[serde(default)]
    pub rsvp_count: u32,
}

impl ContentRecord for CommunityEvent {
    fn kind() -> ContentKind {
        ContentKind::CommunityEvent
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn popularity(&self) -> u64 {
        self.rsvp_count as u64
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

        let ends_at = event
            .field_opt_str("ends_at")
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            id: event.id.clone(),
            title: event.field_str("title", ""),
            summary: event.field_str("summary", ""),
            culture: event.field_str("culture", ""),
            venue: event.field_opt_str("venue"),
            starts_at: event.field_timestamp("starts_at"),
            ends_at,
            tags: event.field_list("tags"),
            author: AuthorRef::from_event(event),
            protocol,
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            rsvp_count: event.field_u32("rsvp_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::community_events()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if !filter_eq(&query.culture, &self.culture) {
            return false;
        }
        if !tags_match(&query.tags, &self.tags) {
            return false;
        }
        if let Some(ref search) = query.search {
            let venue = self.venue.as_deref().unwrap_or("");
            if !text_matches(search, &[&self.title, &self.summary, venue]) {
                return false;
            }
        }
        true
    }
}

/// A content label (taxonomy term)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub slug: String,

    pub author: AuthorRef,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Rollup: records carrying this label
    #[serde(default)]
    pub usage_count: u32,
}

impl ContentRecord for Label {
    fn kind() -> ContentKind {
        ContentKind::Label
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn popularity(&self) -> u64 {
        self.usage_count as u64
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn protocol(&self) -> CulturalProtocol {
        CulturalProtocol::Open
    }

    fn author(&self) -> &AuthorRef {
        &self.author
    }

    fn from_event(event: &NetworkEvent) -> Result<Self> {
        event.payload_object()?;

        let name = event.field_str("name", "");
        let slug = event
            .field_opt_str("slug")
            .unwrap_or_else(|| name.to_lowercase().replace(' ', "-"));

        Ok(Self {
            id: event.id.clone(),
            name,
            slug,
            author: AuthorRef::from_event(event),
            created_at: event.created_at,
            updated_at: event.field_timestamp("updated_at"),
            usage_count: event.field_u32("usage_count"),
        })
    }

    fn fallback_catalog() -> Vec<Self> {
        crate::catalog::labels()
    }

    fn matches(&self, query: &ContentQuery) -> bool {
        if let Some(ref search) = query.search {
            if !text_matches(search, &[&self.name, &self.slug]) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_slug_derivation() {
        let event = NetworkEvent::new(
            ContentKind::Label,
            "keeper-1",
            serde_json::json!({ "name": "Weaving Patterns" }),
        );
        let label = Label::from_event(&event).unwrap();
        assert_eq!(label.slug, "weaving-patterns");
    }

    #[test]
    fn test_contribution_defaults() {
        let event = NetworkEvent::new(
            ContentKind::Contribution,
            "member-9",
            serde_json::json!({ "title": "Grandmother's net song", "culture": "culture-tesshi" }),
        );
        let contribution = Contribution::from_event(&event).unwrap();
        assert_eq!(contribution.kind, "story");
        assert_eq!(contribution.status, "submitted");
    }
}
