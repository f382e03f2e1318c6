//! Typed content records
//!
//! Records are plain serde types decoded from raw network events. Each carries
//! an identifier, descriptive fields, a denormalized author reference,
//! timestamps, a protocol level, and rollup counters where the network
//! publishes them. Rollups are eventually-consistent approximations computed
//! elsewhere and cached on the record.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Result;
use crate::event::{ContentKind, NetworkEvent};
use crate::protocol::CulturalProtocol;
use crate::query::ContentQuery;

mod community;
mod culture;
mod exhibition;
mod resource;
mod story;

pub use community::{CommunityEvent, Contribution, Contributor, Label};
pub use culture::Culture;
pub use exhibition::{Artifact, Exhibition};
pub use resource::Resource;
pub use story::ElderStory;

/// Denormalized reference to the agent that published a record.
///
/// No referential integrity is enforced; the id may not resolve to a
/// known contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Publishing agent identifier
    pub id: String,
    /// Display name as announced at publish time
    #[serde(default)]
    pub display_name: String,
}

impl AuthorRef {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Build from an event's author fields
    pub fn from_event(event: &NetworkEvent) -> Self {
        let display_name = event
            .author_name
            .clone()
            .or_else(|| event.field_opt_str("author_name"))
            .unwrap_or_default();
        Self {
            id: event.author.clone(),
            display_name,
        }
    }
}

/// Behavior shared by every content record the aggregation layer serves.
///
/// This is the seam the generic list/get/statistics machinery works over,
/// so adding a content type means implementing this trait and seeding the
/// fallback catalog.
pub trait ContentRecord: Clone + Send + Sync + Serialize + DeserializeOwned {
    /// The content kind this record decodes from
    fn kind() -> ContentKind;

    /// Network-level identifier
    fn record_id(&self) -> &str;

    /// Name shown in listings; drives alphabetical sort
    fn display_name(&self) -> &str;

    /// Rollup-derived popularity score; drives popular sort
    fn popularity(&self) -> u64 {
        0
    }

    /// Last update timestamp; drives recent sort
    fn updated_at(&self) -> DateTime<Utc>;

    /// Protocol level for visibility filtering
    fn protocol(&self) -> CulturalProtocol;

    /// Primary language of the record, if it has one
    fn primary_language(&self) -> Option<&str> {
        None
    }

    /// The publishing agent
    fn author(&self) -> &AuthorRef;

    /// Decode from a raw network event
    fn from_event(event: &NetworkEvent) -> Result<Self>;

    /// Static fallback records, in catalog order
    fn fallback_catalog() -> Vec<Self>;

    /// Whether the record matches the query's filters
    fn matches(&self, query: &ContentQuery) -> bool;
}

/// Case-insensitive substring search over a set of record fields
pub(crate) fn text_matches(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// All required tags present (case-insensitive)
pub(crate) fn tags_match(required: &[String], tags: &[String]) -> bool {
    required
        .iter()
        .all(|t| tags.iter().any(|have| have.eq_ignore_ascii_case(t)))
}

/// Optional equality filter helper
pub(crate) fn filter_eq(filter: &Option<String>, value: &str) -> bool {
    match filter {
        Some(wanted) => wanted.eq_ignore_ascii_case(value),
        None => true,
    }
}
