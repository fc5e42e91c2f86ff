//! Category classifier: an explicit ordered list of rules, first match wins.
//!
//! Rules are not mutually exclusive, so order carries meaning. Exact
//! kind-name checks come first, then the nested HTTP response status, then
//! machine-code patterns, then the message pattern. A `TypeError` carrying a
//! 500 response is `code`, and `ECONNRESET` is `database` because the
//! database pattern precedes the network one.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use debuget_core::constants::{HTTP_ERROR_STATUS_MAX, HTTP_ERROR_STATUS_MIN};
use debuget_core::models::{Category, ErrorDescriptor};

use crate::patterns::{self, *};

/// What a rule inspects.
pub enum Matcher {
    /// Kind-name equals one of the listed names exactly.
    Name(&'static [&'static str]),
    /// Nested HTTP response status falls in the half-open range.
    ResponseStatus(Range<u16>),
    /// Machine code (empty when absent) contains a match of the pattern.
    Code(&'static LazyLock<Option<Regex>>),
    /// Message (empty when absent) contains a match of the pattern.
    Message(&'static LazyLock<Option<Regex>>),
}

impl Matcher {
    pub fn matches(&self, descriptor: &ErrorDescriptor) -> bool {
        match self {
            Matcher::Name(names) => names.iter().any(|n| *n == descriptor.name()),
            Matcher::ResponseStatus(range) => descriptor
                .response_status()
                .is_some_and(|status| range.contains(&status)),
            Matcher::Code(pattern) => patterns::is_match(pattern, descriptor.code()),
            Matcher::Message(pattern) => patterns::is_match(pattern, descriptor.message()),
        }
    }
}

/// One step of the cascade.
pub struct Rule {
    /// Stable identifier, used in traces and tests.
    pub id: &'static str,
    pub matcher: Matcher,
    pub category: Category,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            id: "name.syntax",
            matcher: Matcher::Name(&["SyntaxError"]),
            category: Category::Syntax,
        },
        Rule {
            id: "name.code",
            matcher: Matcher::Name(&["TypeError", "ReferenceError"]),
            category: Category::Code,
        },
        Rule {
            id: "name.validation",
            matcher: Matcher::Name(&["ValidationError"]),
            category: Category::Validation,
        },
        Rule {
            id: "name.jwt",
            matcher: Matcher::Name(&["JsonWebTokenError", "TokenExpiredError"]),
            category: Category::Jwt,
        },
        Rule {
            id: "name.abort",
            matcher: Matcher::Name(&["AbortError"]),
            category: Category::Abort,
        },
        Rule {
            id: "name.aggregate",
            matcher: Matcher::Name(&["AggregateError"]),
            category: Category::Aggregate,
        },
        Rule {
            id: "response.http",
            matcher: Matcher::ResponseStatus(HTTP_ERROR_STATUS_MIN..HTTP_ERROR_STATUS_MAX),
            category: Category::Http,
        },
        Rule {
            id: "code.database",
            matcher: Matcher::Code(&RE_DATABASE),
            category: Category::Database,
        },
        Rule {
            id: "code.network",
            matcher: Matcher::Code(&RE_NETWORK),
            category: Category::Network,
        },
        Rule {
            id: "code.auth",
            matcher: Matcher::Code(&RE_AUTH),
            category: Category::Auth,
        },
        Rule {
            id: "code.fs",
            matcher: Matcher::Code(&RE_FS),
            category: Category::Fs,
        },
        Rule {
            id: "code.dns",
            matcher: Matcher::Code(&RE_DNS),
            category: Category::Dns,
        },
        Rule {
            id: "code.stream",
            matcher: Matcher::Code(&RE_STREAM),
            category: Category::Stream,
        },
        Rule {
            id: "code.tls",
            matcher: Matcher::Code(&RE_TLS),
            category: Category::Tls,
        },
        Rule {
            id: "message.parse",
            matcher: Matcher::Message(&RE_PARSE_MESSAGE),
            category: Category::Syntax,
        },
    ]
});

/// The cascade, in evaluation order. `default` is implied after the last rule.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Classify a descriptor. Total: falls through to [`Category::Default`].
pub fn classify(descriptor: &ErrorDescriptor) -> Category {
    classify_with_rule(descriptor).0
}

/// Classify a descriptor and report the id of the rule that matched
/// (`None` for the catch-all).
pub fn classify_with_rule(descriptor: &ErrorDescriptor) -> (Category, Option<&'static str>) {
    rules()
        .iter()
        .find(|rule| rule.matcher.matches(descriptor))
        .map(|rule| (rule.category, Some(rule.id)))
        .unwrap_or((Category::Default, None))
}
