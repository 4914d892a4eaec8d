use std::path::PathBuf;

use thiserror::Error;

use crate::ask::{MISSING_MESSAGE, RATE_LIMIT_MESSAGE};

/// Errors from the ask proxy.
#[derive(Debug, Error)]
pub enum AskError {
    /// The request body had no usable `message`. Carries the body as received.
    #[error("message is required")]
    MissingMessage { received_body: serde_json::Value },

    #[error("upstream rate limit exceeded")]
    RateLimited,

    #[error("upstream API error: {status} {reason}")]
    Upstream {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AskError {
    /// Human-readable message returned to clients for this error.
    pub fn client_message(&self) -> String {
        match self {
            AskError::MissingMessage { .. } => MISSING_MESSAGE.to_string(),
            AskError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            AskError::Upstream { status, reason, .. } => {
                format!("Rukh API error: {status} {reason}")
                    .trim_end()
                    .to_string()
            }
            AskError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// Errors loading the curated-list document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch curated list: {0}")]
    Fetch(String),

    #[error("curated list source returned status {0}")]
    Status(u16),
}

/// Errors related to the wallet account.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid wallet address: '{0}'")]
    InvalidAddress(String),
}

/// Errors loading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
