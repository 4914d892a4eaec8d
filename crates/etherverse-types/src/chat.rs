//! Chat view models.
//!
//! These live only for the duration of a chat session; nothing here is
//! persisted.

use serde::{Deserialize, Serialize};

/// A single entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_link: Option<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            tx_hash: None,
            explorer_link: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            tx_hash: None,
            explorer_link: None,
        }
    }

    /// Attach an on-chain receipt. Empty strings are treated as absent.
    pub fn with_receipt(mut self, tx_hash: Option<String>, explorer_link: Option<String>) -> Self {
        self.tx_hash = tx_hash.filter(|s| !s.is_empty());
        self.explorer_link = explorer_link.filter(|s| !s.is_empty());
        self
    }

    /// Both a transaction hash and an explorer link are present.
    pub fn has_receipt(&self) -> bool {
        self.tx_hash.is_some() && self.explorer_link.is_some()
    }
}

/// Severity of a transient notification shown next to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
}

/// A transient notification (toast) raised by a chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}
