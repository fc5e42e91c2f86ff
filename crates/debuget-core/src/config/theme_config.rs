use serde::{Deserialize, Serialize};

use crate::models::{Theme, ThemePatch};

/// `[theme]` section. Unset keys fall back to the compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Keep the header emoji. Default: true.
    pub emoji: Option<bool>,
    /// Apply terminal colors. Default: true.
    pub colors: Option<bool>,
    /// Frames shown in the call journey. Default: 3.
    pub stack_depth: Option<usize>,
    /// Show the call journey. Default: true.
    pub show_stack: Option<bool>,
}

impl ThemeConfig {
    /// The section as a patch over the default theme.
    pub fn to_patch(&self) -> ThemePatch {
        ThemePatch {
            emoji: self.emoji,
            colors: self.colors,
            stack_depth: self.stack_depth,
            show_stack: self.show_stack,
        }
    }

    /// Effective theme: defaults with this section merged in.
    pub fn effective(&self) -> Theme {
        Theme::default().merged(&self.to_patch())
    }
}
