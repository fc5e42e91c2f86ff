//! Compiled machine-code and message patterns used by the classifier.
//!
//! All patterns are case-insensitive substring searches. A pattern that fails
//! to compile degrades to `None` and never matches.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! code_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

code_pattern!(RE_DATABASE, r"(?i)ECONN|MONGO|POSTGRES");
code_pattern!(RE_NETWORK, r"(?i)ENOTFOUND|ETIMEDOUT|ECONNRESET|EHOSTUNREACH");
code_pattern!(RE_AUTH, r"(?i)EACCES|EPERM");
code_pattern!(RE_FS, r"(?i)ENOENT|EEXIST|EISDIR|ENOTDIR");
code_pattern!(RE_DNS, r"(?i)EAI_AGAIN|ENETUNREACH|EADDRINFO");
code_pattern!(RE_STREAM, r"(?i)EPIPE|ERR_STREAM_PREMATURE_CLOSE");
code_pattern!(RE_TLS, r"(?i)CERT_|UNABLE_TO_VERIFY");
code_pattern!(RE_PARSE_MESSAGE, r"(?i)EJSON|EPARSE");

/// True when `pattern` compiled and finds a match anywhere in `text`.
pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Number of patterns that failed to compile. Zero in a healthy build.
pub fn failed_pattern_count() -> usize {
    [
        &RE_DATABASE,
        &RE_NETWORK,
        &RE_AUTH,
        &RE_FS,
        &RE_DNS,
        &RE_STREAM,
        &RE_TLS,
        &RE_PARSE_MESSAGE,
    ]
    .iter()
    .filter(|p| p.is_none())
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(failed_pattern_count(), 0);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert!(is_match(&RE_DATABASE, "mongoServerError"));
        assert!(is_match(&RE_TLS, "ERR_TLS_CERT_ALTNAME_INVALID"));
        assert!(!is_match(&RE_AUTH, ""));
    }
}
