//! Installs a process-wide hook, so it lives in its own test binary.

use std::sync::Arc;

use debuget_core::models::Theme;
use debuget_hooks::{install_panic_hook, PanicPolicy};
use debuget_report::{MemorySink, Reporter, TextStackResolver};

#[test]
fn panics_are_reported_then_unwind_continues() {
    let sink = Arc::new(MemorySink::new());
    let theme = Theme {
        colors: false,
        ..Theme::default()
    };
    let reporter = Arc::new(Reporter::new(TextStackResolver, theme, sink.clone()));
    install_panic_hook(reporter, PanicPolicy::Continue);

    let result = std::panic::catch_unwind(|| {
        panic!("boom at startup");
    });
    let _ = std::panic::take_hook();

    assert!(result.is_err());
    let texts = sink.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("RUNTIME ISSUE"));
    assert!(texts[0].contains("Error: Panic: boom at startup"));
    assert!(texts[0].contains("Where it broke:  at "));
    assert!(texts[0].contains("panic_hook_test.rs"));
}
