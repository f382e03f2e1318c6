//! HTTP client for the Kinloom gateway API

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, SdkError};
use crate::event::{ContentKind, EventBatch, NetworkEvent, QueryOptions};

use super::EventStore;

/// HTTP client for a Kinloom gateway
///
/// # Example
///
/// ```rust,no_run
/// use kinloom_sdk::{GatewayClient, Settings};
///
/// let settings = Settings::from_env();
/// let client = GatewayClient::new(&settings);
/// ```
pub struct GatewayClient {
    base_url: String,
    client: Client,
}

impl GatewayClient {
    /// Create a new gateway client from SDK settings
    pub fn new(settings: &Settings) -> Self {
        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = settings.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .expect("Invalid API key"),
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: settings.gateway_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn events_url(&self, kind: ContentKind, options: &QueryOptions) -> String {
        let mut url = format!("{}/api/v1/events/{}", self.base_url, kind.as_str());

        let mut params = vec![format!("limit={}", options.limit)];
        if let Some(ref search) = options.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        for tag in &options.tags {
            params.push(format!("tags={}", urlencoding::encode(tag)));
        }
        if let Some(since) = options.since {
            params.push(format!("since={}", urlencoding::encode(&since.to_rfc3339())));
        }

        url.push('?');
        url.push_str(&params.join("&"));
        url
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(SdkError::NotFound("resource not found".to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::NetworkUnavailable(format!(
                "HTTP {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SdkError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl EventStore for GatewayClient {
    async fn query(&self, kind: ContentKind, options: QueryOptions) -> Result<EventBatch> {
        let url = self.events_url(kind, &options);
        debug!(kind = %kind, url = %url, "Querying gateway");

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn publish(&self, event: NetworkEvent) -> Result<()> {
        let url = format!("{}/api/v1/events", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&event)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::NetworkUnavailable(format!(
                "HTTP {} - {}",
                status, body
            )));
        }
        Ok(())
    }

    async fn healthy(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_encoding() {
        let settings = Settings {
            gateway_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let client = GatewayClient::new(&settings);

        let options = QueryOptions {
            limit: 25,
            search: Some("tide songs".to_string()),
            ..Default::default()
        };
        let url = client.events_url(ContentKind::ElderStory, &options);
        assert_eq!(
            url,
            "http://localhost:8080/api/v1/events/elder_story?limit=25&search=tide%20songs"
        );
    }
}
