//! # debuget-report
//!
//! Turns an [`ErrorDescriptor`](debuget_core::ErrorDescriptor) into a boxed,
//! human-readable terminal report and writes it to a diagnostic sink.
//!
//! - [`Reporter`]: the facade (`report`, `format`, `update_theme`, `theme`)
//! - [`composer`]: model building, section layout, fallback
//! - default collaborators: [`TextStackResolver`], [`AnsiStyler`],
//!   [`PlainStyler`], [`RoundBoxRenderer`], [`StderrSink`], [`MemorySink`]

pub mod boxing;
pub mod composer;
pub mod reporter;
pub mod sink;
pub mod stack;
pub mod styling;
pub mod theme_store;
pub mod tracing_setup;

pub use boxing::RoundBoxRenderer;
pub use composer::ReportComposer;
pub use reporter::Reporter;
pub use sink::{MemorySink, StderrSink};
pub use stack::TextStackResolver;
pub use styling::{AnsiStyler, PlainStyler};
pub use theme_store::ThemeStore;
