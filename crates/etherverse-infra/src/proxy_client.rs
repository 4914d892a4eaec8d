//! Chat client for a running Etherverse server's `/api/ask` route.
//!
//! Mirrors what a browser chat page does: post one [`AskRequest`], then read
//! the JSON reply as an answer, a rate-limit notice, or an error message.

use anyhow::Context;
use etherverse_core::chat::{ChatBackend, TurnOutcome};
use etherverse_types::ask::{AskRequest, AskResponse};
use serde_json::Value;
use tracing::debug;

use crate::USER_AGENT;

pub struct ProxyClient {
    ask_url: String,
    http: reqwest::Client,
}

impl ProxyClient {
    /// `server_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(server_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build proxy HTTP client")?;

        Ok(Self {
            ask_url: format!("{}/api/ask", server_url.trim_end_matches('/')),
            http,
        })
    }

    pub fn ask_url(&self) -> &str {
        &self.ask_url
    }
}

impl ChatBackend for ProxyClient {
    async fn send(&self, request: &AskRequest) -> TurnOutcome {
        let response = match self.http.post(&self.ask_url).json(request).send().await {
            Ok(response) => response,
            Err(e) => return TurnOutcome::Failed(format!("Failed to reach {}: {e}", self.ask_url)),
        };

        let status = response.status();
        debug!(status = status.as_u16(), "Proxy replied");

        if status.is_success() {
            return match response.json::<AskResponse>().await {
                Ok(answer) => TurnOutcome::Answered(answer),
                Err(e) => TurnOutcome::Failed(format!("Unreadable answer: {e}")),
            };
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        if body.get("status").and_then(Value::as_u64) == Some(429) {
            let message = message.unwrap_or_else(|| format!("API error: {}", status.as_u16()));
            return TurnOutcome::RateLimited(message);
        }

        TurnOutcome::Failed(message.unwrap_or_else(|| format!("API error: {}", status.as_u16())))
    }

    fn describe(&self) -> String {
        format!("proxy -> {}", self.ask_url)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn request() -> AskRequest {
        AskRequest {
            message: "gm".to_string(),
            session_id: Some(String::new()),
            context: Some("etherverse".to_string()),
            address: Some("0x5c527b6950F9FF2144eD138bCB1adDE703f81Af3".to_string()),
        }
    }

    async fn server_replying(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn posts_request_and_reads_answer() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .and(body_json(json!({
                "message": "gm",
                "sessionId": "",
                "context": "etherverse",
                "address": "0x5c527b6950F9FF2144eD138bCB1adDE703f81Af3"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "network": "sepolia",
                "model": "mistral",
                "txHash": "0xfeed",
                "explorerLink": "https://sepolia.etherscan.io/tx/0xfeed",
                "output": "gm fren",
                "sessionId": "sess-2"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ProxyClient::new(&mock_server.uri()).unwrap();
        match client.send(&request()).await {
            TurnOutcome::Answered(answer) => {
                assert_eq!(answer.output, "gm fren");
                assert_eq!(answer.session_id, "sess-2");
                assert_eq!(answer.tx_hash.as_deref(), Some("0xfeed"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_body_becomes_inline_message() {
        let server = server_replying(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Sorry, you reached the limit. Please come back in one hour.",
            "error": "RATE_LIMIT_EXCEEDED",
            "status": 429
        })))
        .await;

        let client = ProxyClient::new(&server.uri()).unwrap();
        assert_eq!(
            client.send(&request()).await,
            TurnOutcome::RateLimited(
                "Sorry, you reached the limit. Please come back in one hour.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn error_body_message_is_used() {
        let server = server_replying(ResponseTemplate::new(502).set_body_json(json!({
            "message": "Rukh API error: 502 Bad Gateway",
            "error": "upstream down"
        })))
        .await;

        let client = ProxyClient::new(&server.uri()).unwrap();
        assert_eq!(
            client.send(&request()).await,
            TurnOutcome::Failed("Rukh API error: 502 Bad Gateway".to_string())
        );
    }

    #[tokio::test]
    async fn non_json_error_falls_back_to_status() {
        let server = server_replying(ResponseTemplate::new(500).set_body_string("oops")).await;

        let client = ProxyClient::new(&server.uri()).unwrap();
        assert_eq!(
            client.send(&request()).await,
            TurnOutcome::Failed("API error: 500".to_string())
        );
    }

    #[test]
    fn ask_url_is_under_api() {
        let client = ProxyClient::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(client.ask_url(), "http://127.0.0.1:3000/api/ask");
    }
}
