//! Terminal styling providers.

use debuget_core::traits::{Emphasis, IStyler};

const RESET_BOLD_DIM: &str = "\x1b[22m";
const RESET_ITALIC: &str = "\x1b[23m";
const RESET_UNDERLINE: &str = "\x1b[24m";
const RESET_FG: &str = "\x1b[39m";

/// 24-bit color styling with the report palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

/// SGR sequence selecting a 24-bit foreground color.
fn fg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

pub(crate) mod palette {
    pub const CRITICAL: (u8, u8, u8) = (0xFF, 0x6B, 0x6B);
    pub const INFO: (u8, u8, u8) = (0x6C, 0xBE, 0xED);
    pub const CODE: (u8, u8, u8) = (0xA9, 0xE3, 0x4B);
    pub const PATH: (u8, u8, u8) = (0x74, 0x8F, 0xFC);
}

impl IStyler for AnsiStyler {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match emphasis {
            Emphasis::Critical => format!(
                "\x1b[1m{}{text}{RESET_FG}{RESET_BOLD_DIM}",
                fg(palette::CRITICAL)
            ),
            Emphasis::Info => format!("{}{text}{RESET_FG}", fg(palette::INFO)),
            Emphasis::Code => format!(
                "\x1b[3m{}{text}{RESET_FG}{RESET_ITALIC}",
                fg(palette::CODE)
            ),
            Emphasis::Path => format!(
                "\x1b[4m{}{text}{RESET_FG}{RESET_UNDERLINE}",
                fg(palette::PATH)
            ),
            Emphasis::Dim => format!("\x1b[2m{text}{RESET_BOLD_DIM}"),
            Emphasis::Label => format!("\x1b[1m{text}{RESET_BOLD_DIM}"),
            Emphasis::Error => format!("\x1b[31m{text}{RESET_FG}"),
        }
    }
}

impl IStyler for PlainStyler {
    fn paint(&self, _emphasis: Emphasis, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_wraps_and_resets() {
        let painted = AnsiStyler.paint(Emphasis::Critical, "BOOM");
        assert!(painted.starts_with("\x1b[1m\x1b[38;2;255;107;107m"));
        assert!(painted.contains("BOOM"));
        assert!(painted.ends_with("\x1b[22m"));
    }

    #[test]
    fn ansi_leaves_empty_text_empty() {
        assert_eq!(AnsiStyler.paint(Emphasis::Info, ""), "");
    }

    #[test]
    fn plain_is_identity() {
        assert_eq!(PlainStyler.paint(Emphasis::Path, "a/b.rs:3"), "a/b.rs:3");
    }
}
