//! Shared domain types for Etherverse.
//!
//! This crate contains the data shapes used across the workspace: the ask
//! proxy request/response, chat view models, curated-list entries, wallet
//! account state, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod ask;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod wallet;
