//! The reporter facade.

use std::sync::Arc;

use debuget_core::config::DebugetConfig;
use debuget_core::models::{ErrorDescriptor, Theme, ThemePatch};
use debuget_core::traits::{IDiagnosticSink, IStackResolver, Severity};

use crate::composer::ReportComposer;
use crate::sink::StderrSink;
use crate::stack::TextStackResolver;
use crate::theme_store::ThemeStore;
use crate::tracing_setup::{init_tracing, init_tracing_with_filter};

/// Classifies, explains and renders errors, and writes them to a sink.
///
/// Owns its live theme. Share it across tasks behind an `Arc`.
///
/// Composition failures are logged with `tracing::error!`. Reporters built
/// with [`Reporter::new`] or [`Reporter::with_composer`] rely on the caller to
/// install a subscriber, e.g. with [`init_tracing`].
pub struct Reporter<R> {
    composer: ReportComposer<R>,
    theme: ThemeStore,
    sink: Arc<dyn IDiagnosticSink>,
}

impl Reporter<TextStackResolver> {
    /// Text stack parsing, default theme, standard error.
    ///
    /// Installs the debuget tracing subscriber (see [`init_tracing`]) so that
    /// composition failures reach standard error. An already installed global
    /// subscriber is kept.
    pub fn with_defaults() -> Self {
        init_tracing();
        Self::new(TextStackResolver, Theme::default(), Arc::new(StderrSink))
    }

    /// Text stack parsing and standard error, themed from loaded configuration.
    ///
    /// Installs the tracing subscriber with the configured log filter.
    pub fn from_config(config: &DebugetConfig) -> Self {
        init_tracing_with_filter(&config.observability.log_filter);
        Self::new(TextStackResolver, config.theme(), Arc::new(StderrSink))
    }
}

impl<R: IStackResolver> Reporter<R> {
    pub fn new(resolver: R, theme: Theme, sink: Arc<dyn IDiagnosticSink>) -> Self {
        Self::with_composer(ReportComposer::new(resolver), theme, sink)
    }

    pub fn with_composer(
        composer: ReportComposer<R>,
        theme: Theme,
        sink: Arc<dyn IDiagnosticSink>,
    ) -> Self {
        Self {
            composer,
            theme: ThemeStore::new(theme),
            sink,
        }
    }

    /// Render `descriptor` and write it to the sink. Never fails.
    pub async fn report(&self, descriptor: &ErrorDescriptor) {
        let text = self.format(descriptor).await;
        self.sink.emit(Severity::Error, &text);
    }

    /// Render `descriptor` without writing it.
    pub async fn format(&self, descriptor: &ErrorDescriptor) -> String {
        let theme = self.theme.snapshot();
        self.composer.format(descriptor, &theme).await
    }

    /// Merge `patch` into the live theme.
    pub fn update_theme(&self, patch: ThemePatch) {
        self.theme.update(patch);
    }

    pub fn theme(&self) -> Theme {
        self.theme.snapshot()
    }

    pub fn composer(&self) -> &ReportComposer<R> {
        &self.composer
    }
}
