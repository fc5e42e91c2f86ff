//! Bordered box around report content.
//!
//! Widths are measured in terminal columns after stripping SGR escape
//! sequences, so styled and plain content produce the same geometry.

use std::sync::LazyLock;

use regex::Regex;

use debuget_core::errors::RenderError;
use debuget_core::traits::{BorderStyle, BoxOptions, IBoxRenderer};

static RE_SGR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").ok());

/// Columns per unit of horizontal padding or margin.
const HORIZONTAL_SCALE: usize = 3;

/// Remove SGR escape sequences.
pub fn strip_ansi(text: &str) -> String {
    match RE_SGR.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// True when `text` contains an escape character.
pub fn has_ansi(text: &str) -> bool {
    text.contains('\x1b')
}

fn char_width(c: char) -> usize {
    let cp = c as u32;
    match cp {
        0x200B..=0x200D | 0xFE00..=0xFE0F | 0x0300..=0x036F => 0,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F000..=0x1FAFF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// Terminal columns occupied by `text`, ignoring SGR sequences.
///
/// A variation selector 16 widens a preceding narrow symbol (`⏹️`) to two
/// columns.
pub fn display_width(text: &str) -> usize {
    let plain = strip_ansi(text);
    let mut width = 0;
    let mut prev: Option<char> = None;
    for c in plain.chars() {
        if c == '\u{FE0F}' {
            if let Some(p) = prev {
                if !p.is_ascii() && char_width(p) == 1 {
                    width += 1;
                }
            }
        } else {
            width += char_width(c);
        }
        prev = Some(c);
    }
    width
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

fn glyphs(style: BorderStyle) -> Glyphs {
    match style {
        BorderStyle::Round => Glyphs {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
        },
        BorderStyle::Single => Glyphs {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        },
        BorderStyle::Double => Glyphs {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        },
    }
}

/// Parse `#RRGGBB`.
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), RenderError> {
    let invalid = || RenderError::InvalidOptions {
        reason: format!("border color {hex:?} is not #RRGGBB"),
    };
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Draws a box with rounded corners by default.
#[derive(Debug, Clone, Default)]
pub struct RoundBoxRenderer {
    max_width: Option<usize>,
}

impl RoundBoxRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse content whose box would exceed `columns`.
    pub fn with_max_width(mut self, columns: usize) -> Self {
        self.max_width = Some(columns);
        self
    }
}

impl IBoxRenderer for RoundBoxRenderer {
    fn render(&self, content: &str, options: &BoxOptions) -> Result<String, RenderError> {
        let color = options
            .border_color
            .as_deref()
            .map(parse_hex_color)
            .transpose()?;
        let paint = |s: String| match color {
            Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{s}\x1b[39m"),
            None => s,
        };

        let g = glyphs(options.border_style);
        let lines: Vec<&str> = content.split('\n').collect();
        let content_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let hpad = options.padding * HORIZONTAL_SCALE;
        let inner = content_width + 2 * hpad;
        let indent = " ".repeat(options.margin * HORIZONTAL_SCALE);

        let total = indent.len() + inner + 2;
        if let Some(limit) = self.max_width {
            if total > limit {
                return Err(RenderError::ContentTooWide {
                    width: total,
                    limit,
                });
            }
        }

        let horizontal: String = std::iter::repeat(g.horizontal).take(inner).collect();
        let side = paint(g.vertical.to_string());
        let blank_row = format!("{indent}{side}{}{side}", " ".repeat(inner));

        let mut out: Vec<String> = Vec::with_capacity(lines.len() + 4 * options.padding + 2);
        out.extend(std::iter::repeat(String::new()).take(options.margin));
        out.push(format!(
            "{indent}{}",
            paint(format!("{}{horizontal}{}", g.top_left, g.top_right))
        ));
        out.extend(std::iter::repeat(blank_row.clone()).take(options.padding));
        for line in lines {
            let fill = content_width - display_width(line);
            out.push(format!(
                "{indent}{side}{pad}{line}{fill}{pad}{side}",
                pad = " ".repeat(hpad),
                fill = " ".repeat(fill),
            ));
        }
        out.extend(std::iter::repeat(blank_row).take(options.padding));
        out.push(format!(
            "{indent}{}",
            paint(format!("{}{horizontal}{}", g.bottom_left, g.bottom_right))
        ));
        out.extend(std::iter::repeat(String::new()).take(options.margin));

        Ok(out.join("\n"))
    }
}
