//! Text-based stack resolver.
//!
//! Understands two layouts:
//! - V8: `at fn (file:line:col)` and `at file:line:col`
//! - Rust backtraces: `N: path::to::fn` followed by `at file:line:col`;
//!   inlined callers appear as an unindexed symbol line between them
//!
//! Lines that match neither (the header line, `stack backtrace:`) are skipped.

use std::sync::LazyLock;

use regex::Regex;

use debuget_core::errors::ResolveError;
use debuget_core::models::{ErrorDescriptor, Frame};
use debuget_core::traits::IStackResolver;

static RE_V8_CALL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^at\s+(?:(?P<func>.+?)\s+\((?P<loc>.+)\)|(?P<bare>.+))$").ok());

static RE_LOCATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<file>.+?):(?P<line>\d+)(?::(?P<col>\d+))?$").ok());

static RE_RUST_FRAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<idx>\d+):\s+(?P<func>.+?)(?:::h[0-9a-f]{16})?$").ok()
});

/// Unindexed symbol line of an inlined Rust frame.
static RE_RUST_INLINED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<func>.+?)(?:::h[0-9a-f]{16})?$").ok());

/// Resolves frames by parsing the descriptor's raw stack text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStackResolver;

impl TextStackResolver {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw stack text into frames, outer to inner.
    pub fn parse(stack: &str) -> Result<Vec<Frame>, ResolveError> {
        let (Some(v8_call), Some(location), Some(rust_frame), Some(rust_inlined)) = (
            RE_V8_CALL.as_ref(),
            RE_LOCATION.as_ref(),
            RE_RUST_FRAME.as_ref(),
            RE_RUST_INLINED.as_ref(),
        ) else {
            return Err(ResolveError::Unavailable {
                reason: "frame patterns failed to compile".to_string(),
            });
        };

        let mut frames: Vec<Frame> = Vec::new();
        // Set while the last Rust frame header still waits for its `at` line.
        let mut pending_rust = false;
        // Set once an indexed Rust frame has been seen.
        let mut in_rust_backtrace = false;

        for (idx, raw) in stack.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = rust_frame.captures(line) {
                let func = caps.name("func").map(|m| m.as_str().to_string());
                frames.push(Frame::new(func, None, None));
                pending_rust = true;
                in_rust_backtrace = true;
                continue;
            }

            let is_call_site = line == "at" || line.starts_with("at ");
            if in_rust_backtrace && !is_call_site {
                if let Some(caps) = rust_inlined.captures(line) {
                    let func = caps.name("func").map(|m| m.as_str().to_string());
                    frames.push(Frame::new(func, None, None));
                    pending_rust = true;
                }
                continue;
            }

            if is_call_site {
                let caps = v8_call.captures(line).ok_or_else(|| ResolveError::MalformedFrame {
                    line: idx + 1,
                    reason: "call site has no location".to_string(),
                })?;

                if pending_rust {
                    if let (Some(frame), Some(loc)) = (frames.last_mut(), caps.name("bare")) {
                        apply_location(frame, loc.as_str(), location);
                        pending_rust = false;
                        continue;
                    }
                }

                let mut frame = Frame::default();
                if let Some(func) = caps.name("func") {
                    let name = func.as_str();
                    let name = name.strip_prefix("async ").unwrap_or(name);
                    frame.function_name = Some(name.to_string());
                }
                let loc = caps.name("loc").or_else(|| caps.name("bare"));
                if let Some(loc) = loc {
                    apply_location(&mut frame, loc.as_str(), location);
                }
                frames.push(frame);
                pending_rust = false;
            }
        }

        Ok(frames)
    }
}

fn apply_location(frame: &mut Frame, text: &str, location: &Regex) {
    match location.captures(text) {
        Some(caps) => {
            frame.file_name = caps.name("file").map(|m| m.as_str().to_string());
            frame.line_number = caps.name("line").and_then(|m| m.as_str().parse().ok());
            frame.column_number = caps.name("col").and_then(|m| m.as_str().parse().ok());
        }
        None => frame.file_name = Some(text.to_string()),
    }
}

impl IStackResolver for TextStackResolver {
    async fn resolve(&self, descriptor: &ErrorDescriptor) -> Result<Vec<Frame>, ResolveError> {
        let stack = descriptor.stack.as_deref().ok_or(ResolveError::MissingStack)?;
        Self::parse(stack)
    }
}
