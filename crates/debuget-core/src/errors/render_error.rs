/// Errors raised while turning a report model into text.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid box options: {reason}")]
    InvalidOptions { reason: String },

    #[error("content too wide: {width} columns exceeds limit {limit}")]
    ContentTooWide { width: usize, limit: usize },
}
