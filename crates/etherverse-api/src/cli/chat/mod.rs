//! Interactive terminal chat for Etherverse.
//!
//! Sends each message through a [`ChatBackend`](etherverse_core::chat::ChatBackend),
//! renders answers as markdown with highlighted code, and shows on-chain
//! receipts when the upstream records one. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
