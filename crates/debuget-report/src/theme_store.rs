//! Live theme shared by every report of a [`Reporter`](crate::Reporter).
//!
//! Each switch is stored in its own atomic. A report running concurrently
//! with an update may observe some switches before the update and some
//! after; each switch is individually last-write-wins.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use debuget_core::models::{Theme, ThemePatch};

#[derive(Debug)]
pub struct ThemeStore {
    emoji: AtomicBool,
    colors: AtomicBool,
    stack_depth: AtomicUsize,
    show_stack: AtomicBool,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            emoji: AtomicBool::new(theme.emoji),
            colors: AtomicBool::new(theme.colors),
            stack_depth: AtomicUsize::new(theme.stack_depth),
            show_stack: AtomicBool::new(theme.show_stack),
        }
    }

    /// Current value of every switch.
    pub fn snapshot(&self) -> Theme {
        Theme {
            emoji: self.emoji.load(Ordering::Relaxed),
            colors: self.colors.load(Ordering::Relaxed),
            stack_depth: self.stack_depth.load(Ordering::Relaxed),
            show_stack: self.show_stack.load(Ordering::Relaxed),
        }
    }

    /// Merge `patch` into the live theme. Unspecified switches keep their values.
    pub fn update(&self, patch: ThemePatch) {
        if let Some(v) = patch.emoji {
            self.emoji.store(v, Ordering::Relaxed);
        }
        if let Some(v) = patch.colors {
            self.colors.store(v, Ordering::Relaxed);
        }
        if let Some(v) = patch.stack_depth {
            self.stack_depth.store(v, Ordering::Relaxed);
        }
        if let Some(v) = patch.show_stack {
            self.show_stack.store(v, Ordering::Relaxed);
        }
        tracing::debug!(?patch, "theme updated");
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
