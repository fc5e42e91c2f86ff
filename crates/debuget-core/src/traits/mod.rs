//! Collaborator seams of the report pipeline.
//!
//! The core composes reports against these traits only. Default
//! implementations live in `debuget-report`.

pub mod box_renderer;
pub mod diagnostic_sink;
pub mod stack_resolver;
pub mod styler;

pub use box_renderer::{BorderStyle, BoxOptions, IBoxRenderer};
pub use diagnostic_sink::{IDiagnosticSink, Severity};
pub use stack_resolver::IStackResolver;
pub use styler::{Emphasis, IStyler};
