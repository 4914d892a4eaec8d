//! Ask proxy wire types.
//!
//! `AskRequest` is what a chat client posts to `/api/ask`, `UpstreamPayload`
//! is what the proxy forwards to the upstream `/ask` route, and `AskResponse`
//! is the upstream answer as the chat client reads it.

use serde::{Deserialize, Serialize};

/// Message returned to clients when the upstream rate limit is hit.
pub const RATE_LIMIT_MESSAGE: &str = "Sorry, you reached the limit. Please come back in one hour.";

/// Machine-readable error code paired with [`RATE_LIMIT_MESSAGE`].
pub const RATE_LIMIT_CODE: &str = "RATE_LIMIT_EXCEEDED";

/// Message returned when the request body has no usable `message`.
pub const MISSING_MESSAGE: &str = "Message is required";

/// Body posted by a chat client to the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Connected wallet address. Informational; the proxy does not forward it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body forwarded to the upstream `/ask` route after default substitution.
///
/// Fields hold whatever JSON the client posted; only the defaults are
/// guaranteed to be strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPayload {
    pub message: serde_json::Value,
    pub context: serde_json::Value,
    pub session_id: serde_json::Value,
}

/// Upstream answer.
///
/// Fields the upstream adds beyond the known ones are kept in `extra`.
/// `tx_hash` and `explorer_link` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_link: Option<String>,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Raw status line and body returned by the upstream, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    /// Canonical reason phrase for `status` (e.g. "Bad Gateway"); may be empty.
    pub reason: String,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ask_request_uses_camel_case_keys() {
        let req = AskRequest {
            message: "gm".to_string(),
            session_id: Some("abc".to_string()),
            context: Some("etherverse".to_string()),
            address: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"message": "gm", "sessionId": "abc", "context": "etherverse"})
        );
    }

    #[test]
    fn ask_response_keeps_unknown_fields() {
        let value = json!({
            "network": "sepolia",
            "model": "mistral",
            "txHash": "0xabc",
            "explorerLink": "https://sepolia.etherscan.io/tx/0xabc",
            "output": "hello",
            "sessionId": "s-1",
            "latencyMs": 42
        });
        let resp: AskResponse = serde_json::from_value(value).unwrap();
        assert_eq!(resp.output, "hello");
        assert_eq!(resp.tx_hash.as_deref(), Some("0xabc"));
        assert_eq!(resp.extra.get("latencyMs"), Some(&json!(42)));
    }

    #[test]
    fn ask_response_tolerates_missing_fields() {
        let resp: AskResponse = serde_json::from_value(json!({"output": "hi"})).unwrap();
        assert_eq!(resp.output, "hi");
        assert!(resp.tx_hash.is_none());
        assert!(resp.session_id.is_empty());
    }

    #[test]
    fn upstream_reply_success_range() {
        let reply = |status| UpstreamReply {
            status,
            reason: String::new(),
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(429).is_success());
        assert!(!reply(500).is_success());
    }
}
