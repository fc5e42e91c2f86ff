//! # debuget-core
//!
//! Foundation crate for the debuget error reporter.
//! Defines the error descriptor, categories, report model, theme, collaborator
//! traits, errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DebugetConfig;
pub use errors::{DebugetError, DebugetResult};
pub use models::{Category, ErrorDescriptor, Frame, ReportModel, Theme, ThemePatch};
