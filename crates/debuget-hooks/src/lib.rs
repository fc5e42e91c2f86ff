//! # debuget-hooks
//!
//! Adapters that feed errors from the outside world into a
//! [`Reporter`](debuget_report::Reporter):
//! - [`panic`]: process-wide panic hook
//! - [`http`]: report-then-respond for HTTP handlers
//! - [`fatal`]: report a fatal error and exit

pub mod fatal;
pub mod http;
pub mod panic;

pub use fatal::{report_error, report_fatal};
pub use http::{respond, ErrorBody, HttpErrorResponse};
pub use panic::{install_panic_hook, panic_descriptor, PanicPolicy, PANIC_ERROR_NAME, PANIC_EXIT_CODE};
