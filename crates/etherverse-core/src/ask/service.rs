//! Ask proxy service.
//!
//! `AskService` takes the JSON body posted to `/api/ask`, fills in the
//! default context and session id, forwards it once to the upstream, and
//! turns the reply into either the upstream JSON (unmodified) or an
//! [`AskError`] describing which of the three failure branches applies.

use etherverse_types::ask::UpstreamPayload;
use etherverse_types::config::UpstreamConfig;
use etherverse_types::error::AskError;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::ask::upstream::AskUpstream;

/// Stateless one-shot forwarder to the upstream conversational API.
///
/// Generic over `AskUpstream` so the HTTP transport lives in
/// `etherverse-infra`.
pub struct AskService<U: AskUpstream> {
    upstream: U,
    default_context: String,
    default_session_id: String,
}

impl<U: AskUpstream> AskService<U> {
    pub fn new(upstream: U, default_context: String, default_session_id: String) -> Self {
        Self {
            upstream,
            default_context,
            default_session_id,
        }
    }

    /// Create a service using the defaults from the upstream config section.
    pub fn from_config(upstream: U, config: &UpstreamConfig) -> Self {
        Self::new(
            upstream,
            config.default_context.clone(),
            config.default_session_id.clone(),
        )
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Validate the posted body and build the payload forwarded upstream.
    ///
    /// A falsy value (absent, `null`, `false`, `0`, or `""`) counts as not
    /// given: `message` is then missing, while `context` and `sessionId` fall
    /// back to the configured defaults. Anything else is forwarded as posted,
    /// whatever its JSON type.
    pub fn build_payload(&self, body: &Value) -> Result<UpstreamPayload, AskError> {
        let Some(message) = truthy(body, "message") else {
            return Err(AskError::MissingMessage {
                received_body: body.clone(),
            });
        };

        let context = truthy(body, "context")
            .cloned()
            .unwrap_or_else(|| Value::String(self.default_context.clone()));
        let session_id = truthy(body, "sessionId")
            .cloned()
            .unwrap_or_else(|| Value::String(self.default_session_id.clone()));

        Ok(UpstreamPayload {
            message: message.clone(),
            context,
            session_id,
        })
    }

    /// Forward one message upstream and return its JSON answer verbatim.
    pub async fn ask(&self, body: Value) -> Result<Value, AskError> {
        let payload = match self.build_payload(&body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Missing message in ask request body");
                return Err(e);
            }
        };

        debug!(
            url = %self.upstream.endpoint(),
            context = %payload.context,
            session_id = %payload.session_id,
            "Sending request to upstream"
        );

        let reply = self.upstream.post_ask(&payload).await.inspect_err(|e| {
            error!(error = %e, "Upstream request failed");
        })?;

        info!(status = reply.status, "Upstream response received");

        if !reply.is_success() {
            error!(
                status = reply.status,
                reason = %reply.reason,
                body = %reply.body,
                "Upstream API error"
            );
            if reply.status == 429 {
                return Err(AskError::RateLimited);
            }
            return Err(AskError::Upstream {
                status: reply.status,
                reason: reply.reason,
                body: reply.body,
            });
        }

        let answer: Value = serde_json::from_str(&reply.body).map_err(|e| {
            error!(error = %e, "Upstream returned a non-JSON success body");
            AskError::Internal(format!("invalid upstream JSON: {e}"))
        })?;

        let field = |key: &str| answer.get(key).and_then(Value::as_str).unwrap_or_default();
        let (session_id, tx_hash, model) = (field("sessionId"), field("txHash"), field("model"));
        debug!(session_id, tx_hash, model, "Upstream answer parsed");

        Ok(answer)
    }
}

fn truthy<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
