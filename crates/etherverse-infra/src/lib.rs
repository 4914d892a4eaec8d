//! Infrastructure layer for Etherverse.
//!
//! Implements the ports defined in `etherverse-core` over HTTP with reqwest:
//! the upstream conversational API, the curated-list document, and the local
//! `/api/ask` proxy as seen by a chat client. Also loads `config.toml`.

pub mod catalog;
pub mod config;
pub mod proxy_client;
pub mod upstream;

/// User agent sent on every outgoing request.
pub(crate) const USER_AGENT: &str = concat!("etherverse/", env!("CARGO_PKG_VERSION"));
