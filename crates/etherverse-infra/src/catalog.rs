//! Curated-list document fetched over HTTP.

use anyhow::Context;
use etherverse_core::catalog::CatalogSource;
use etherverse_types::config::CatalogConfig;
use etherverse_types::error::CatalogError;

use crate::USER_AGENT;

/// One GET of the configured markdown URL per load. No caching.
pub struct HttpCatalogSource {
    url: String,
    http: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self {
            url: config.url.clone(),
            http,
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_markdown(&self) -> Result<String, CatalogError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Curated list fetch failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))
    }

    fn location(&self) -> &str {
        &self.url
    }
}
