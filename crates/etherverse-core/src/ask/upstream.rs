use std::future::Future;

use etherverse_types::ask::{UpstreamPayload, UpstreamReply};
use etherverse_types::error::AskError;

/// Transport to the upstream conversational API.
///
/// Implementations perform exactly one POST per call and report whatever
/// status and body came back. Interpreting the status is the caller's job;
/// only transport failures (connect, timeout, unreadable body) are errors,
/// reported as [`AskError::Internal`]. Uses RPITIT for async methods.
pub trait AskUpstream: Send + Sync {
    fn post_ask(
        &self,
        payload: &UpstreamPayload,
    ) -> impl Future<Output = Result<UpstreamReply, AskError>> + Send;

    /// Endpoint description for logging.
    fn endpoint(&self) -> &str;
}
