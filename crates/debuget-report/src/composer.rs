//! Report composition: descriptor → [`ReportModel`] → boxed text.
//!
//! A report moves through `received → classified → explained →
//! stack-resolved → rendered`. Any failure after `received` switches to the
//! fallback text of the descriptor instead; composition never fails outward.

use chrono::Utc;
use tracing::Instrument;

use debuget_classify::{classify_with_rule, explain_with_layer, header_for, strip_emoji};
use debuget_core::constants::{BORDER_COLOR_HEX, UNKNOWN_LOCATION};
use debuget_core::errors::{DebugetResult, RenderError};
use debuget_core::models::{ErrorDescriptor, Frame, ReportModel, Theme};
use debuget_core::traits::{BorderStyle, BoxOptions, Emphasis, IBoxRenderer, IStackResolver, IStyler};

use crate::boxing::RoundBoxRenderer;
use crate::styling::{AnsiStyler, PlainStyler};

/// Drop dependency frames, keep the first `depth` of the rest in order.
pub fn journey(frames: Vec<Frame>, depth: usize) -> Vec<Frame> {
    frames
        .into_iter()
        .filter(|f| !f.is_dependency())
        .take(depth)
        .collect()
}

/// Box layout used for every report.
pub fn box_options(theme: &Theme) -> BoxOptions {
    BoxOptions {
        padding: 1,
        margin: 1,
        border_style: BorderStyle::Round,
        border_color: theme.colors.then(|| BORDER_COLOR_HEX.to_string()),
    }
}

pub struct ReportComposer<R> {
    resolver: R,
    boxer: Box<dyn IBoxRenderer>,
    styler: Box<dyn IStyler>,
}

impl<R: IStackResolver> ReportComposer<R> {
    /// Composer with the default box renderer and ANSI styling.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            boxer: Box::new(RoundBoxRenderer::new()),
            styler: Box::new(AnsiStyler),
        }
    }

    pub fn with_box_renderer(mut self, boxer: impl IBoxRenderer + 'static) -> Self {
        self.boxer = Box::new(boxer);
        self
    }

    /// Styler used when the theme enables colors.
    pub fn with_styler(mut self, styler: impl IStyler + 'static) -> Self {
        self.styler = Box::new(styler);
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Build the report model. Only stack resolution can fail.
    pub async fn compose(
        &self,
        descriptor: &ErrorDescriptor,
        theme: &Theme,
    ) -> DebugetResult<ReportModel> {
        let (category, rule) = classify_with_rule(descriptor);
        tracing::debug!(%category, rule = rule.unwrap_or("catch-all"), "classified");

        let raw_header = header_for(category);
        let header = if theme.emoji {
            raw_header
        } else {
            strip_emoji(raw_header)
        };

        let (explanation, layer) = explain_with_layer(descriptor);
        tracing::debug!(?layer, "explained");

        let frames = if !theme.show_stack {
            None
        } else if descriptor.stack.is_none() {
            Some(Vec::new())
        } else {
            let resolved = self
                .resolver
                .resolve(descriptor)
                .instrument(crate::resolve_span!(theme.stack_depth))
                .await?;
            let kept = journey(resolved, theme.stack_depth);
            tracing::debug!(frames = kept.len(), "stack resolved");
            Some(kept)
        };

        Ok(ReportModel {
            category,
            header: header.to_string(),
            explanation: explanation.to_string(),
            timestamp: Utc::now(),
            status: descriptor.display_status(),
            error_line: descriptor.error_line(),
            code: descriptor.code.clone().filter(|c| !c.is_empty()),
            location: descriptor
                .location_line()
                .unwrap_or(UNKNOWN_LOCATION)
                .to_string(),
            frames,
            causes: descriptor.causes.iter().map(ErrorDescriptor::error_line).collect(),
        })
    }

    /// Lay out and box a model.
    pub fn render(&self, model: &ReportModel, theme: &Theme) -> Result<String, RenderError> {
        let styler: &dyn IStyler = if theme.colors {
            self.styler.as_ref()
        } else {
            &PlainStyler
        };
        let content = layout(model, styler);
        self.boxer.render(&content, &box_options(theme))
    }

    /// Compose and render, falling back to unformatted text on failure.
    pub async fn format(&self, descriptor: &ErrorDescriptor, theme: &Theme) -> String {
        let span = crate::report_span!(debuget_classify::classify(descriptor));
        async {
            let rendered: DebugetResult<String> = match self.compose(descriptor, theme).await {
                Ok(model) => self.render(&model, theme).map_err(Into::into),
                Err(e) => Err(e),
            };
            match rendered {
                Ok(text) => {
                    tracing::debug!("rendered");
                    text
                }
                Err(e) => {
                    tracing::error!(error = %e, "error formatting error report");
                    descriptor.fallback_text()
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Section text of a report, before boxing.
pub fn layout(model: &ReportModel, styler: &dyn IStyler) -> String {
    let label = |text: &str| styler.paint(Emphasis::Label, text);

    let mut meta = vec![styler.paint(Emphasis::Dim, &model.timestamp_iso())];
    if let Some(status) = model.status {
        meta.push(format!("{} {status}", label("Status:")));
    }
    meta.push(format!(
        "{} {}",
        styler.paint(Emphasis::Error, "Error:"),
        model.error_line
    ));
    if let Some(code) = &model.code {
        meta.push(format!("{} {code}", label("Code:")));
    }

    let mut sections = vec![
        styler.paint(Emphasis::Critical, &model.header),
        meta.join("\n"),
        format!(
            "{}  {}",
            label("What happened?"),
            styler.paint(Emphasis::Info, &model.explanation)
        ),
        format!(
            "{}  {}",
            label("Where it broke:"),
            styler.paint(Emphasis::Code, &model.location)
        ),
    ];

    if let Some(frames) = &model.frames {
        let trail = frames
            .iter()
            .map(|frame| {
                format!(
                    "{} {}\n   {}",
                    styler.paint(Emphasis::Dim, "➜"),
                    styler.paint(Emphasis::Code, frame.display_function()),
                    styler.paint(Emphasis::Path, &frame.location())
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!("{}\n{trail}", label("Call journey:")));
    }

    if !model.causes.is_empty() {
        let causes = model
            .causes
            .iter()
            .map(|c| format!("  - {c}"))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("{}\n{causes}", label("Caused by:")));
    }

    sections.join("\n\n")
}
