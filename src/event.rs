//! Raw network event model
//!
//! The decentralized event network carries untyped JSON payloads tagged with a
//! content kind, an author, and a creation timestamp. Typed records are decoded
//! from events field-by-field with lenient defaults; only a payload that is not
//! a JSON object counts as malformed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::{Result, SdkError};

/// Content kinds understood by the aggregation layer.
///
/// The network itself is kind-agnostic; these strings map to the
/// `/api/v1/events/{kind}` routes on the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Culture,
    Exhibition,
    Artifact,
    Resource,
    ElderStory,
    Contributor,
    Contribution,
    CommunityEvent,
    Label,
}

impl ContentKind {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "culture" => Some(Self::Culture),
            "exhibition" => Some(Self::Exhibition),
            "artifact" => Some(Self::Artifact),
            "resource" => Some(Self::Resource),
            "elder_story" => Some(Self::ElderStory),
            "contributor" => Some(Self::Contributor),
            "contribution" => Some(Self::Contribution),
            "community_event" => Some(Self::CommunityEvent),
            "label" => Some(Self::Label),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Exhibition => "exhibition",
            Self::Artifact => "artifact",
            Self::Resource => "resource",
            Self::ElderStory => "elder_story",
            Self::Contributor => "contributor",
            Self::Contribution => "contribution",
            Self::CommunityEvent => "community_event",
            Self::Label => "label",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw event from the decentralized network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEvent {
    /// Network-level event identifier
    pub id: String,

    /// Content kind string (see [`ContentKind`])
    pub kind: String,

    /// Publishing agent identifier
    pub author: String,

    /// Display name of the publishing agent, if announced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Event creation timestamp
    pub created_at: DateTime<Utc>,

    /// Free-form event tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Untyped content payload
    pub payload: JsonValue,
}

impl NetworkEvent {
    /// Create a new event for publishing
    pub fn new(kind: ContentKind, author: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.as_str().to_string(),
            author: author.into(),
            author_name: None,
            created_at: Utc::now(),
            tags: Vec::new(),
            payload,
        }
    }

    /// The payload as an object, or a malformed-response error
    pub fn payload_object(&self) -> Result<&serde_json::Map<String, JsonValue>> {
        self.payload.as_object().ok_or_else(|| {
            SdkError::MalformedResponse(format!("event {} payload is not an object", self.id))
        })
    }

    /// Extract a string field from the payload, with default
    pub fn field_str(&self, key: &str, default: &str) -> String {
        self.payload
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    }

    /// Extract an optional string field from the payload
    pub fn field_opt_str(&self, key: &str) -> Option<String> {
        self.payload
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Extract an unsigned counter field from the payload
    pub fn field_u32(&self, key: &str) -> u32 {
        self.payload
            .get(key)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32
    }

    /// Extract a string-array field from the payload
    pub fn field_list(&self, key: &str) -> Vec<String> {
        self.payload
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract an RFC 3339 timestamp field, falling back to the event timestamp
    pub fn field_timestamp(&self, key: &str) -> DateTime<Utc> {
        self.payload
            .get(key)
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(self.created_at)
    }
}

/// Query options passed to the event store
#[derive(Debug, Clone, Serialize)]
pub struct QueryOptions {
    /// Maximum events to return; 0 requests a count only
    pub limit: u32,
    /// Full-text search hint (gateway-side)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Only events carrying all of these tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Only events created after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            search: None,
            tags: Vec::new(),
            since: None,
        }
    }
}

impl QueryOptions {
    /// Options that request a count only
    pub fn count_only() -> Self {
        Self {
            limit: 0,
            ..Default::default()
        }
    }

    /// Options with an explicit limit
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }
}

/// Batch of events returned by a store query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventBatch {
    /// Returned events, newest first unless the store says otherwise
    pub events: Vec<NetworkEvent>,
    /// Total matching events, when the store can count them
    pub total: Option<u64>,
}

impl EventBatch {
    /// Best-effort total: the store's count, or the batch length
    pub fn total_or_len(&self) -> u64 {
        self.total.unwrap_or(self.events.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ContentKind::Culture,
            ContentKind::ElderStory,
            ContentKind::CommunityEvent,
        ] {
            assert_eq!(ContentKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ContentKind::from_str("mystery"), None);
    }

    #[test]
    fn test_field_extraction_defaults() {
        let event = NetworkEvent::new(
            ContentKind::Culture,
            "agent-1",
            serde_json::json!({
                "name": "Tesshi Islanders",
                "languages": ["Tesshi", "English"],
                "story_count": 4,
            }),
        );

        assert_eq!(event.field_str("name", ""), "Tesshi Islanders");
        assert_eq!(event.field_str("region", "unknown"), "unknown");
        assert_eq!(event.field_u32("story_count"), 4);
        assert_eq!(event.field_u32("missing"), 0);
        assert_eq!(event.field_list("languages").len(), 2);
        assert!(event.field_opt_str("summary").is_none());
    }

    #[test]
    fn test_payload_must_be_object() {
        let event = NetworkEvent::new(ContentKind::Label, "agent-1", serde_json::json!("nope"));
        assert!(event.payload_object().is_err());
    }
}
