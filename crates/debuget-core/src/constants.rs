/// debuget version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder for the "where it broke" line when the raw stack has no frame line.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Placeholder function name for anonymous frames.
pub const ANONYMOUS_FUNCTION: &str = "<anonymous>";

/// Last-resort fallback text when an error has neither stack nor message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Path fragments marking third-party dependency frames.
/// Frames whose file path contains any of these are dropped from the call journey.
pub const DEPENDENCY_PATH_MARKERS: &[&str] = &["node_modules", "/.cargo/registry/", "/rustc/"];

/// HTTP status range that classifies an error carrying a response as `http`.
pub const HTTP_ERROR_STATUS_MIN: u16 = 400;
pub const HTTP_ERROR_STATUS_MAX: u16 = 600;

/// Status used by the HTTP responder when the error carries no `status_code`.
pub const DEFAULT_HTTP_RESPONSE_STATUS: u16 = 500;

/// Border color of the report box when colors are enabled.
pub const BORDER_COLOR_HEX: &str = "#FF6B6B";
