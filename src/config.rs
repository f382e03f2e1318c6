//! Configuration for the Kinloom SDK
//!
//! Read once from the process environment at startup:
//!
//! - `KINLOOM_NETWORK_ENABLED`: Set to "true" to fetch live content (default: false)
//! - `KINLOOM_GATEWAY_URL`: Base URL of the gateway (default: "http://localhost:8080")
//! - `KINLOOM_API_KEY`: Optional bearer token for authenticated access
//! - `KINLOOM_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
//! - `KINLOOM_VIEWER_CLEARANCE`: Protocol clearance for this viewer (default: "open")

use crate::protocol::CulturalProtocol;

/// SDK settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Whether live network fetching is enabled
    pub network_enabled: bool,
    /// Base URL for the Kinloom gateway HTTP API
    pub gateway_url: String,
    /// Optional API key for authenticated access
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Protocol clearance of the viewing agent
    pub viewer_clearance: CulturalProtocol,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network_enabled: false,
            gateway_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout_secs: 30,
            viewer_clearance: CulturalProtocol::Open,
        }
    }
}

impl Settings {
    /// Create settings from environment variables
    pub fn from_env() -> Self {
        let network_enabled = std::env::var("KINLOOM_NETWORK_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let gateway_url = std::env::var("KINLOOM_GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let api_key = std::env::var("KINLOOM_API_KEY").ok();

        let timeout_secs = std::env::var("KINLOOM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let viewer_clearance = std::env::var("KINLOOM_VIEWER_CLEARANCE")
            .ok()
            .and_then(|v| CulturalProtocol::from_str(&v))
            .unwrap_or(CulturalProtocol::Open);

        Self {
            network_enabled,
            gateway_url,
            api_key,
            timeout_secs,
            viewer_clearance,
        }
    }

    /// Settings for an offline consumer (catalog only)
    pub fn offline() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.network_enabled);
        assert_eq!(settings.gateway_url, "http://localhost:8080");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.viewer_clearance, CulturalProtocol::Open);
    }
}
