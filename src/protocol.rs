//! Cultural protocol access levels
//!
//! Communities on the network restrict who may view certain knowledge.
//! Every record carries a protocol level; the aggregation service filters
//! listings against the viewer's clearance before pagination.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};

/// Protocol levels from most open to most restricted.
///
/// The ladder is `open` → `community` → `elders` → `sacred`.
/// Higher numeric values = more restricted. A record at level N is
/// visible to a viewer whose clearance is >= N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CulturalProtocol {
    /// Open knowledge - visible to everyone
    Open = 0,
    /// Community members only
    Community = 1,
    /// Recognized elders and knowledge keepers
    Elders = 2,
    /// Sacred material - designated custodians only
    Sacred = 3,
}

impl CulturalProtocol {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" | "public" => Some(Self::Open),
            "community" => Some(Self::Community),
            "elders" => Some(Self::Elders),
            "sacred" => Some(Self::Sacred),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Community => "community",
            Self::Elders => "elders",
            Self::Sacred => "sacred",
        }
    }

    /// Check if this level is openly visible
    pub fn is_open(&self) -> bool {
        *self == Self::Open
    }

    /// Check if the given clearance can view content at this level
    pub fn visible_to(&self, clearance: CulturalProtocol) -> bool {
        clearance >= *self
    }
}

impl Default for CulturalProtocol {
    fn default() -> Self {
        Self::Open
    }
}

impl std::fmt::Display for CulturalProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enforces protocol-based visibility for a viewing agent.
#[derive(Debug, Clone)]
pub struct ProtocolEnforcer {
    clearance: CulturalProtocol,
}

impl ProtocolEnforcer {
    /// Create an enforcer with the viewer's clearance
    pub fn new(clearance: CulturalProtocol) -> Self {
        Self { clearance }
    }

    /// Enforcer for anonymous viewers (open content only)
    pub fn anonymous() -> Self {
        Self {
            clearance: CulturalProtocol::Open,
        }
    }

    /// Enforcer for authenticated community members
    pub fn member() -> Self {
        Self {
            clearance: CulturalProtocol::Community,
        }
    }

    /// Enforcer for recognized elders
    pub fn elder() -> Self {
        Self {
            clearance: CulturalProtocol::Elders,
        }
    }

    /// Check if the viewer can see content at the given level
    pub fn can_view(&self, level: CulturalProtocol) -> bool {
        level.visible_to(self.clearance)
    }

    /// Check visibility and return an error if denied
    pub fn check(&self, level: CulturalProtocol) -> Result<()> {
        if self.can_view(level) {
            Ok(())
        } else {
            Err(SdkError::AccessDenied {
                required: level.to_string(),
                actual: self.clearance.to_string(),
            })
        }
    }

    /// Get the viewer's clearance
    pub fn clearance(&self) -> CulturalProtocol {
        self.clearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_ladder() {
        // Higher value = more restricted
        assert!(CulturalProtocol::Sacred > CulturalProtocol::Open);
        assert!(CulturalProtocol::Elders > CulturalProtocol::Community);
    }

    #[test]
    fn test_visible_to() {
        // Open content visible to any clearance
        assert!(CulturalProtocol::Open.visible_to(CulturalProtocol::Open));
        assert!(CulturalProtocol::Open.visible_to(CulturalProtocol::Sacred));

        // Sacred content only visible to sacred clearance
        assert!(CulturalProtocol::Sacred.visible_to(CulturalProtocol::Sacred));
        assert!(!CulturalProtocol::Sacred.visible_to(CulturalProtocol::Elders));
        assert!(!CulturalProtocol::Sacred.visible_to(CulturalProtocol::Open));

        // Community content visible to community and above
        assert!(CulturalProtocol::Community.visible_to(CulturalProtocol::Community));
        assert!(CulturalProtocol::Community.visible_to(CulturalProtocol::Elders));
        assert!(!CulturalProtocol::Community.visible_to(CulturalProtocol::Open));
    }

    #[test]
    fn test_enforcer() {
        let enforcer = ProtocolEnforcer::member();

        assert!(enforcer.can_view(CulturalProtocol::Open));
        assert!(enforcer.can_view(CulturalProtocol::Community));
        assert!(!enforcer.can_view(CulturalProtocol::Elders));
        assert!(!enforcer.can_view(CulturalProtocol::Sacred));

        assert!(enforcer.check(CulturalProtocol::Sacred).is_err());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            CulturalProtocol::from_str("public"),
            Some(CulturalProtocol::Open)
        );
        assert_eq!(CulturalProtocol::from_str("unknown"), None);
    }
}
