//! Business logic and port traits for Etherverse.
//!
//! This crate defines the "ports" (`AskUpstream`, `CatalogSource`,
//! `ChatBackend`) that the infrastructure layer implements. It depends only
//! on `etherverse-types` -- never on `etherverse-infra` or any network crate.

pub mod ask;
pub mod catalog;
pub mod chat;
