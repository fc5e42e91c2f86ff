//! Plain-language explanations, resolved through layered lookup:
//! exact machine code, then numeric status, then kind-name, then a generic
//! sentence. Only the first matching layer is used.

use debuget_core::models::ErrorDescriptor;

/// Which lookup layer produced an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationLayer {
    Code,
    Status,
    Name,
    Fallback,
}

pub const FALLBACK_EXPLANATION: &str =
    "An unexpected error occurred while running the application.";

static BY_CODE: &[(&str, &str)] = &[
    ("ECONNREFUSED", "Couldn't reach the database. Is it running?"),
    ("ENOENT", "Tried to access a file that doesn't exist. Check the path."),
    ("ENOTFOUND", "Network connection failed. Check your internet connection."),
    ("EACCES", "Permission denied. Try running with elevated privileges."),
    ("EPIPE", "A broken pipe occurred. Ensure the receiving stream is open."),
    ("ETIMEDOUT", "Operation timed out. The resource may be unavailable."),
    ("EHOSTUNREACH", "Host unreachable. Verify network settings or DNS."),
    ("EAI_AGAIN", "DNS lookup timed out. Try again later."),
    ("CERT_HAS_EXPIRED", "SSL certificate expired. Renew the certificate."),
    (
        "UNABLE_TO_VERIFY_LEAF_SIGNATURE",
        "SSL verification failed. Check your CA chain.",
    ),
];

static BY_STATUS: &[(u16, &str)] = &[
    (400, "Bad request. Check your inputs or query parameters."),
    (401, "Unauthorized. You need to log in or refresh credentials."),
    (403, "Forbidden. You don\u{2019}t have permission to perform this action."),
    (404, "Not found. The requested resource doesn\u{2019}t exist."),
    (500, "Internal server error. Something went wrong on the server."),
];

static BY_NAME: &[(&str, &str)] = &[
    ("SyntaxError", "There was a syntax problem. Verify your code or JSON."),
    ("ReferenceError", "Tried to use a variable or function that doesn't exist."),
    ("TypeError", "Tried to use a value in an invalid way (wrong type)."),
    ("ValidationError", "Input failed validation rules. Check required fields."),
    ("JsonWebTokenError", "Your authentication token is invalid or malformed."),
    (
        "TokenExpiredError",
        "Your authentication token has expired. Please log in again.",
    ),
    ("AggregateError", "Multiple errors occurred. Check each cause."),
    ("AbortError", "The operation was aborted before completion."),
];

pub fn by_code(code: &str) -> Option<&'static str> {
    BY_CODE.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
}

pub fn by_status(status: u16) -> Option<&'static str> {
    BY_STATUS.iter().find(|(k, _)| *k == status).map(|(_, v)| *v)
}

pub fn by_name(name: &str) -> Option<&'static str> {
    BY_NAME.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

/// Explanation sentence for a descriptor. Total.
pub fn explain(descriptor: &ErrorDescriptor) -> &'static str {
    explain_with_layer(descriptor).0
}

/// Explanation sentence plus the layer that produced it.
///
/// The status layer reads `status`, then `status_code`, then the nested
/// response status.
pub fn explain_with_layer(descriptor: &ErrorDescriptor) -> (&'static str, ExplanationLayer) {
    if let Some(text) = descriptor.code.as_deref().and_then(by_code) {
        return (text, ExplanationLayer::Code);
    }
    if let Some(text) = descriptor.explanation_status().and_then(by_status) {
        return (text, ExplanationLayer::Status);
    }
    if let Some(text) = descriptor.name.as_deref().and_then(by_name) {
        return (text, ExplanationLayer::Name);
    }
    (FALLBACK_EXPLANATION, ExplanationLayer::Fallback)
}
