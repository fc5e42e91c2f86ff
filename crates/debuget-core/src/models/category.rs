use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human-meaningful category assigned to every reported error.
///
/// Closed set. `Default` is the catch-all and is always reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Syntax,
    Network,
    Auth,
    Validation,
    Code,
    Jwt,
    Fs,
    Abort,
    Aggregate,
    Http,
    Dns,
    Tls,
    Stream,
    #[default]
    Default,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 15] = [
        Category::Database,
        Category::Syntax,
        Category::Network,
        Category::Auth,
        Category::Validation,
        Category::Code,
        Category::Jwt,
        Category::Fs,
        Category::Abort,
        Category::Aggregate,
        Category::Http,
        Category::Dns,
        Category::Tls,
        Category::Stream,
        Category::Default,
    ];

    /// Lowercase tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Database => "database",
            Category::Syntax => "syntax",
            Category::Network => "network",
            Category::Auth => "auth",
            Category::Validation => "validation",
            Category::Code => "code",
            Category::Jwt => "jwt",
            Category::Fs => "fs",
            Category::Abort => "abort",
            Category::Aggregate => "aggregate",
            Category::Http => "http",
            Category::Dns => "dns",
            Category::Tls => "tls",
            Category::Stream => "stream",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known category tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
