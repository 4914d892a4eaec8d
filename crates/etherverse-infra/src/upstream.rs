//! reqwest transport for the upstream conversational API.

use std::time::Duration;

use anyhow::Context;
use etherverse_core::ask::AskUpstream;
use etherverse_types::ask::{UpstreamPayload, UpstreamReply};
use etherverse_types::config::UpstreamConfig;
use etherverse_types::error::AskError;
use tracing::debug;

use crate::USER_AGENT;

/// Posts payloads to `{base_url}/ask`.
///
/// No retries and no caching; the optional timeout comes from
/// `upstream.timeout_secs`.
pub struct HttpAskUpstream {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpAskUpstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build upstream HTTP client")?;

        Ok(Self {
            endpoint: format!("{}/ask", config.base_url.trim_end_matches('/')),
            http,
        })
    }
}

impl AskUpstream for HttpAskUpstream {
    async fn post_ask(&self, payload: &UpstreamPayload) -> Result<UpstreamReply, AskError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| AskError::Internal(format!("upstream request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AskError::Internal(format!("failed to read upstream body: {e}")))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Upstream replied");

        Ok(UpstreamReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
