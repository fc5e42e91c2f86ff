//! Error handling for debuget.
//! One error enum per subsystem, `thiserror` only.
//!
//! These are failures of the reporter itself. The classification taxonomy of
//! reported errors lives in [`crate::models::Category`].

pub mod config_error;
pub mod render_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use render_error::RenderError;
pub use resolve_error::ResolveError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DebugetError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("stack resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

pub type DebugetResult<T> = Result<T, DebugetError>;
