//! The `/api/ask` proxy: request validation, default substitution, and
//! translation of upstream replies into answers or typed errors.

pub mod service;
pub mod upstream;

pub use service::AskService;
pub use upstream::AskUpstream;
