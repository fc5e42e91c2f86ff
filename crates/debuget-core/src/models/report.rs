use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Frame};

/// Fully composed, renderable representation of one classified error.
///
/// Created fresh per report and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    pub category: Category,
    /// Header banner, already stripped of its emoji when the theme says so.
    pub header: String,
    pub explanation: String,
    /// Capture time of the report, not of the error.
    pub timestamp: DateTime<Utc>,
    pub status: Option<u16>,
    /// `name: message`.
    pub error_line: String,
    pub code: Option<String>,
    /// "Where it broke" line.
    pub location: String,
    /// Call journey. `None` when the theme hides it.
    pub frames: Option<Vec<Frame>>,
    /// One `name: message` summary per nested cause.
    pub causes: Vec<String>,
}

impl ReportModel {
    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
