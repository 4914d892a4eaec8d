//! HTTP layer for Etherverse.
//!
//! Axum server exposing the `/api/ask` chat proxy and the `/api/awesome`
//! curated-list search, with permissive CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
