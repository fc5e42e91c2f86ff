use serde::{Deserialize, Serialize};

use crate::errors::RenderError;

/// Border glyph set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Round,
    Single,
    Double,
}

/// Layout options for the report box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxOptions {
    /// Blank lines above/below the content. Columns left/right are three times this.
    pub padding: usize,
    /// Blank lines above/below the border. Columns left of it are three times this.
    pub margin: usize,
    pub border_style: BorderStyle,
    /// `#RRGGBB` border color. `None` draws an unstyled border.
    pub border_color: Option<String>,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            margin: 1,
            border_style: BorderStyle::Round,
            border_color: None,
        }
    }
}

/// Draws a border around composed report content.
pub trait IBoxRenderer: Send + Sync {
    fn render(&self, content: &str, options: &BoxOptions) -> Result<String, RenderError>;
}
