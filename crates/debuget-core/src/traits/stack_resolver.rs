use crate::errors::ResolveError;
use crate::models::{ErrorDescriptor, Frame};

/// Resolves the raw call stack of an error into symbolic frames.
///
/// This is the only suspension point of a report. No timeout is applied by
/// the reporter; callers needing bounded latency wrap the report call.
#[allow(async_fn_in_trait)]
pub trait IStackResolver: Send + Sync {
    /// Frames in outer-to-inner order, as they appear in the raw stack.
    async fn resolve(&self, descriptor: &ErrorDescriptor) -> Result<Vec<Frame>, ResolveError>;
}
