/// Errors raised by a stack resolution collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("error carries no stack text")]
    MissingStack,

    #[error("malformed stack frame at line {line}: {reason}")]
    MalformedFrame { line: usize, reason: String },

    #[error("stack resolver unavailable: {reason}")]
    Unavailable { reason: String },
}
