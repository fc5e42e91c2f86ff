use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ANONYMOUS_FUNCTION, DEPENDENCY_PATH_MARKERS};

/// One resolved call-site entry of a call-stack trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    pub function_name: Option<String>,
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
}

impl Frame {
    pub fn new(
        function_name: Option<String>,
        file_name: Option<String>,
        line_number: Option<u32>,
    ) -> Self {
        Self {
            function_name,
            file_name,
            line_number,
            column_number: None,
        }
    }

    /// Function name, or `<anonymous>` when the frame has none.
    pub fn display_function(&self) -> &str {
        self.function_name
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(ANONYMOUS_FUNCTION)
    }

    /// `file:line` as shown in the call journey.
    pub fn location(&self) -> String {
        let file = self.file_name.as_deref().unwrap_or("<unknown>");
        match self.line_number {
            Some(line) => format!("{file}:{line}"),
            None => file.to_string(),
        }
    }

    /// True when the file path points into third-party dependency code.
    pub fn is_dependency(&self) -> bool {
        self.file_name
            .as_deref()
            .is_some_and(|f| DEPENDENCY_PATH_MARKERS.iter().any(|m| f.contains(m)))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_function(), self.location())
    }
}
