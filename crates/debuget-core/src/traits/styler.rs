use serde::{Deserialize, Serialize};

/// Emphasis class of a report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Header banner.
    Critical,
    /// Explanation sentence.
    Info,
    /// Code-like text: function names, the "where it broke" line.
    Code,
    /// File paths.
    Path,
    /// Secondary text: timestamp, journey arrows.
    Dim,
    /// Section labels.
    Label,
    /// The `Error:` label.
    Error,
}

/// Terminal styling provider.
pub trait IStyler: Send + Sync {
    /// Styled `text`. Implementations that do not style return it unchanged.
    fn paint(&self, emphasis: Emphasis, text: &str) -> String;
}
