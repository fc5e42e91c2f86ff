//! Tracing initialization for debuget's own diagnostics.
//!
//! Diagnostics go to stderr through `tracing`, never into a rendered report.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use debuget_core::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the debuget tracing subscriber.
///
/// Reads `DEBUGET_LOG` for per-target levels, e.g.
/// `DEBUGET_LOG=debuget_report=debug,debuget_hooks=info`.
/// Falls back to `debuget=warn` when unset or invalid.
///
/// Idempotent. Does nothing if another global subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize with an explicit filter directive, e.g. one read from `debuget.toml`.
pub fn init_tracing_with_filter(directive: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
