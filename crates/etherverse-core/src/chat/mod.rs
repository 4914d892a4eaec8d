//! Chat client flow: transcript state, turn outcomes, and block splitting
//! for assistant answers.

pub mod backend;
pub mod conversation;
pub mod markdown;

pub use backend::{ChatBackend, TurnOutcome};
pub use conversation::{Conversation, GREETING};
pub use markdown::{MarkdownBlock, split_blocks};
