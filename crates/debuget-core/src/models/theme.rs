use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// The four presentation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Keep the leading emoji glyph of the header.
    pub emoji: bool,
    /// Apply terminal styling.
    pub colors: bool,
    /// Maximum number of frames in the call journey.
    pub stack_depth: usize,
    /// Show the call journey section.
    pub show_stack: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            emoji: defaults::DEFAULT_EMOJI,
            colors: defaults::DEFAULT_COLORS,
            stack_depth: defaults::DEFAULT_STACK_DEPTH,
            show_stack: defaults::DEFAULT_SHOW_STACK,
        }
    }
}

impl Theme {
    /// Merge `patch` into this theme. Unspecified fields keep their values.
    pub fn apply(&mut self, patch: &ThemePatch) {
        if let Some(v) = patch.emoji {
            self.emoji = v;
        }
        if let Some(v) = patch.colors {
            self.colors = v;
        }
        if let Some(v) = patch.stack_depth {
            self.stack_depth = v;
        }
        if let Some(v) = patch.show_stack {
            self.show_stack = v;
        }
    }

    /// Copy of this theme with `patch` merged in.
    pub fn merged(mut self, patch: &ThemePatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial theme used by the merge-style update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_stack: Option<bool>,
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine two patches; fields set in `other` win.
    pub fn overlay(self, other: ThemePatch) -> ThemePatch {
        ThemePatch {
            emoji: other.emoji.or(self.emoji),
            colors: other.colors.or(self.colors),
            stack_depth: other.stack_depth.or(self.stack_depth),
            show_stack: other.show_stack.or(self.show_stack),
        }
    }
}

impl From<Theme> for ThemePatch {
    fn from(theme: Theme) -> Self {
        Self {
            emoji: Some(theme.emoji),
            colors: Some(theme.colors),
            stack_depth: Some(theme.stack_depth),
            show_stack: Some(theme.show_stack),
        }
    }
}
