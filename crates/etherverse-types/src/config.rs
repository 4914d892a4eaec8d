//! Configuration types for Etherverse.
//!
//! `EtherverseConfig` represents the top-level `config.toml` that controls
//! the HTTP listener, the upstream conversational API, the curated-list
//! document, and chat client defaults. All fields have defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtherverseConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub catalog: CatalogConfig,
    pub chat: ChatConfig,
}

/// Listener address for `etherverse serve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Base URL a local client would use to reach this server.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// The upstream conversational API the proxy forwards to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL; the proxy posts to `{base_url}/ask`.
    pub base_url: String,
    /// Context tag used when a request omits one.
    pub default_context: String,
    /// Session id used when a request omits one.
    pub default_session_id: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rukh.w3hc.org".to_string(),
            default_context: "rukh".to_string(),
            default_session_id: "12345".to_string(),
            timeout_secs: None,
        }
    }
}

/// Remote markdown document backing the curated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/w3hc/awesome-ethereum/main/README.md".to_string(),
        }
    }
}

/// Chat client defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Context tag the chat client sends with every turn.
    pub context: String,
    /// Wallet address to connect at startup.
    pub address: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context: "etherverse".to_string(),
            address: None,
        }
    }
}
