//! Chat transcript state.
//!
//! `Conversation` owns the message list, the upstream session id, and the
//! "assistant is typing" flag. It builds the outgoing [`AskRequest`] for a
//! user turn and folds the [`TurnOutcome`] back into the transcript. It never
//! performs IO; callers pair it with a [`ChatBackend`](super::ChatBackend).

use etherverse_types::ask::AskRequest;
use etherverse_types::chat::{ChatMessage, Notice};
use etherverse_types::wallet::WalletAccount;

use crate::chat::backend::TurnOutcome;

/// Assistant message every conversation opens with.
pub const GREETING: &str = "Hello! You can ask any question about the future of Ethereum, \
upcoming upgrades, how you can contribute, etc. Enjoy!";

/// Assistant message appended when a turn fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again a bit later.";

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    session_id: Option<String>,
    context: String,
    pending: bool,
}

impl Conversation {
    /// Start a conversation that tags every request with `context`.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            session_id: None,
            context: context.into(),
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Session id issued by the upstream on the last answer, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// A turn has been sent and not yet completed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user message and build the request for it.
    ///
    /// Returns `None` without touching the transcript when the input is blank
    /// or a turn is already pending.
    pub fn begin_turn(&mut self, input: &str, wallet: &WalletAccount) -> Option<AskRequest> {
        if input.trim().is_empty() || self.pending {
            return None;
        }

        self.messages.push(ChatMessage::user(input));
        self.pending = true;

        Some(AskRequest {
            message: input.to_string(),
            session_id: Some(self.session_id.clone().unwrap_or_default()),
            context: Some(self.context.clone()),
            address: wallet.address().map(str::to_string),
        })
    }

    /// Fold the result of the pending turn into the transcript.
    ///
    /// Returns a notice when the failure should be surfaced beyond the
    /// transcript. The pending flag is always cleared.
    pub fn complete_turn(&mut self, outcome: TurnOutcome) -> Option<Notice> {
        self.pending = false;

        match outcome {
            TurnOutcome::Answered(response) => {
                if !response.session_id.is_empty() {
                    self.session_id = Some(response.session_id.clone());
                }
                self.messages.push(
                    ChatMessage::assistant(response.output)
                        .with_receipt(response.tx_hash, response.explorer_link),
                );
                None
            }
            TurnOutcome::RateLimited(message) => {
                self.messages.push(ChatMessage::assistant(message));
                None
            }
            TurnOutcome::Failed(reason) => {
                tracing::warn!(error = %reason, "Chat turn failed");
                self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
                Some(Notice::error(reason))
            }
        }
    }

    /// The most recent `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }
}
