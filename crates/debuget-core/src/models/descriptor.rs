//! Read-only normalized view of a runtime error.
//!
//! The reporter never inspects concrete error types directly. Boundary code
//! adapts whatever was thrown (an `io::Error`, a JSON error, a serialized
//! error from another process) into an [`ErrorDescriptor`] first.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::io;
use std::panic::Location;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_ERROR;

/// Kind-name used when an error does not carry one.
pub const GENERIC_ERROR_NAME: &str = "Error";

/// Nested HTTP-response-like value attached by HTTP clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// A bag of optional fields describing one runtime error.
///
/// Deserializes from the camelCase shape of a serialized runtime error
/// (`statusCode`, `response.status`, `errors` for aggregate causes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorDescriptor {
    /// Kind-name, e.g. `TypeError` or `ValidationError`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Platform or library machine code, e.g. `ECONNREFUSED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseInfo>,
    /// Raw call-stack text. The first line is the error header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Nested causes, for aggregate errors and `source()` chains.
    #[serde(alias = "errors", skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<ErrorDescriptor>,
}

impl ErrorDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_response_status(mut self, status: u16) -> Self {
        self.response = Some(ResponseInfo {
            status: Some(status),
        });
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_cause(mut self, cause: ErrorDescriptor) -> Self {
        self.causes.push(cause);
        self
    }

    /// Attach the caller's location and a freshly captured backtrace as the
    /// raw stack text.
    ///
    /// Layout: `name: message`, then `    at file:line:col` of the caller (the
    /// "where it broke" line), then the backtrace without the frames of the
    /// capture itself.
    #[track_caller]
    pub fn with_captured_backtrace(self) -> Self {
        let caller = Location::caller();
        let backtrace = Backtrace::force_capture().to_string();
        let mut stack = format!(
            "{}\n    at {}:{}:{}",
            self.error_line(),
            caller.file(),
            caller.line(),
            caller.column()
        );
        let frames = strip_capture_frames(&backtrace);
        if !frames.is_empty() {
            stack.push('\n');
            stack.push_str(&frames);
        }
        self.with_stack(stack)
    }

    // --- Accessors ---

    /// Kind-name, empty when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Message, empty when absent.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Machine code, empty when absent.
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    /// Status of the nested HTTP response, if any.
    pub fn response_status(&self) -> Option<u16> {
        self.response.as_ref().and_then(|r| r.status)
    }

    /// Numeric status used for explanation lookup:
    /// `status`, then `status_code`, then the nested response status.
    /// A zero status counts as absent.
    pub fn explanation_status(&self) -> Option<u16> {
        nonzero(self.status)
            .or(nonzero(self.status_code))
            .or_else(|| nonzero(self.response_status()))
    }

    /// Numeric status shown in the report metadata: `status_code`, then `status`.
    /// A zero status counts as absent.
    pub fn display_status(&self) -> Option<u16> {
        nonzero(self.status_code).or(nonzero(self.status))
    }

    /// `name: message` line, with `Error` standing in for a missing name.
    pub fn error_line(&self) -> String {
        let name = self.name.as_deref().unwrap_or(GENERIC_ERROR_NAME);
        format!("{}: {}", name, self.message())
    }

    /// First line after the header line of the raw stack, trimmed.
    /// `None` when the stack is absent or that line is blank.
    pub fn location_line(&self) -> Option<&str> {
        self.stack
            .as_deref()?
            .lines()
            .nth(1)
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Unformatted text to show when a decorated report cannot be built.
    pub fn fallback_text(&self) -> String {
        if let Some(stack) = self.stack.as_deref().filter(|s| !s.trim().is_empty()) {
            return stack.to_string();
        }
        if self.name.is_some() || self.message.is_some() {
            return self.error_line();
        }
        UNKNOWN_ERROR.to_string()
    }

    // --- Adapters ---

    /// Adapt an `io::Error`, mapping its kind onto the platform error code.
    pub fn from_io_error(err: &io::Error) -> Self {
        let mut descriptor = Self::new()
            .named(GENERIC_ERROR_NAME)
            .with_message(err.to_string());
        descriptor.code = io_error_code(err.kind()).map(str::to_string);
        descriptor
    }

    /// Adapt a JSON (de)serialization error. Parse failures surface as `SyntaxError`.
    pub fn from_json_error(err: &serde_json::Error) -> Self {
        let name = match err.classify() {
            serde_json::error::Category::Io => GENERIC_ERROR_NAME,
            _ => "SyntaxError",
        };
        Self::new().named(name).with_message(err.to_string())
    }

    /// Adapt any error type.
    ///
    /// `io::Error` and `serde_json::Error` get their dedicated adapters. Other
    /// types use their short type name as kind-name. The `source()` chain is
    /// captured as causes.
    pub fn from_error<E: StdError + 'static>(err: &E) -> Self {
        let dyn_err: &(dyn StdError + 'static) = err;
        let mut descriptor = from_known_error(dyn_err)
            .unwrap_or_else(|| Self::new().named(short_type_name::<E>()).with_message(err.to_string()));

        let mut source = dyn_err.source();
        while let Some(cause) = source {
            descriptor.causes.push(
                from_known_error(cause).unwrap_or_else(|| {
                    Self::new()
                        .named(GENERIC_ERROR_NAME)
                        .with_message(cause.to_string())
                }),
            );
            source = cause.source();
        }
        descriptor
    }
}

fn nonzero(status: Option<u16>) -> Option<u16> {
    status.filter(|s| *s != 0)
}

/// Frame symbols belonging to the capture machinery rather than the caller.
const CAPTURE_FRAME_PREFIXES: &[&str] = &["std::backtrace", "debuget_core::", "debuget_hooks::"];

/// Drop the leading backtrace frames whose symbol is part of the capture
/// machinery. A frame spans its `N: symbol` line and every line up to the
/// next indexed line.
fn strip_capture_frames(backtrace: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = true;
    for line in backtrace.lines() {
        if let Some(symbol) = indexed_symbol(line) {
            if skipping && CAPTURE_FRAME_PREFIXES.iter().any(|p| symbol.starts_with(p)) {
                continue;
            }
            skipping = false;
        }
        if !skipping {
            kept.push(line);
        }
    }
    kept.join("\n")
}

/// Symbol of an `N: symbol` backtrace line.
fn indexed_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.trim_start().split_once(": ")?;
    (!index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())).then_some(symbol.trim())
}

fn from_known_error(err: &(dyn StdError + 'static)) -> Option<ErrorDescriptor> {
    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        return Some(ErrorDescriptor::from_io_error(io_err));
    }
    if let Some(json_err) = err.downcast_ref::<serde_json::Error>() {
        return Some(ErrorDescriptor::from_json_error(json_err));
    }
    None
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Maps `io::ErrorKind` onto the errno-style code the classifier understands.
fn io_error_code(kind: io::ErrorKind) -> Option<&'static str> {
    let code = match kind {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::ConnectionRefused => "ECONNREFUSED",
        io::ErrorKind::ConnectionReset => "ECONNRESET",
        io::ErrorKind::ConnectionAborted => "ECONNABORTED",
        io::ErrorKind::NotConnected => "ENOTCONN",
        io::ErrorKind::AddrInUse => "EADDRINUSE",
        io::ErrorKind::AddrNotAvailable => "EADDRNOTAVAIL",
        io::ErrorKind::BrokenPipe => "EPIPE",
        io::ErrorKind::AlreadyExists => "EEXIST",
        io::ErrorKind::WouldBlock => "EAGAIN",
        io::ErrorKind::InvalidInput => "EINVAL",
        io::ErrorKind::TimedOut => "ETIMEDOUT",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        _ => return None,
    };
    Some(code)
}
