//! Where a chat turn is sent, and what came back.
//!
//! A chat client either talks to a running Etherverse server over HTTP
//! (`ProxyClient` in `etherverse-infra`) or drives an [`AskService`]
//! in-process. Both report a [`TurnOutcome`].

use std::future::Future;

use etherverse_types::ask::AskRequest;
use etherverse_types::ask::AskResponse;
use etherverse_types::error::AskError;
use serde_json::Value;

use crate::ask::{AskService, AskUpstream};

/// Result of one chat turn as the conversation sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Answered(AskResponse),
    /// Rate limited; carries the message to show in the transcript.
    RateLimited(String),
    /// Any other failure; carries the text for the error notice.
    Failed(String),
}

impl TurnOutcome {
    /// Classify the result of an in-process [`AskService::ask`] call.
    pub fn from_ask_result(result: Result<Value, AskError>) -> Self {
        match result {
            Ok(answer) => match serde_json::from_value::<AskResponse>(answer) {
                Ok(response) => TurnOutcome::Answered(response),
                Err(e) => TurnOutcome::Failed(format!("Unexpected answer shape: {e}")),
            },
            Err(e @ AskError::RateLimited) => TurnOutcome::RateLimited(e.client_message()),
            Err(e) => TurnOutcome::Failed(e.client_message()),
        }
    }
}

/// Sends a chat turn somewhere that can answer it. Uses RPITIT.
pub trait ChatBackend: Send + Sync {
    fn send(&self, request: &AskRequest) -> impl Future<Output = TurnOutcome> + Send;

    /// Short description shown in the chat banner.
    fn describe(&self) -> String;
}

impl<U: AskUpstream> ChatBackend for AskService<U> {
    async fn send(&self, request: &AskRequest) -> TurnOutcome {
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(e) => return TurnOutcome::Failed(format!("Failed to encode request: {e}")),
        };
        TurnOutcome::from_ask_result(self.ask(body).await)
    }

    fn describe(&self) -> String {
        format!("direct -> {}", self.upstream().endpoint())
    }
}
