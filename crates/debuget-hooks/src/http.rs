//! Report-then-respond adapter for HTTP error handlers.

use serde::{Deserialize, Serialize};

use debuget_core::constants::DEFAULT_HTTP_RESPONSE_STATUS;
use debuget_core::models::ErrorDescriptor;
use debuget_core::traits::IStackResolver;
use debuget_report::Reporter;

/// JSON body sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status and body a handler should answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    pub status: u16,
    pub body: ErrorBody,
}

impl HttpErrorResponse {
    /// Body serialized as JSON.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

/// Report `descriptor`, then build the response: `status_code` or 500, and
/// `{"error": message}`.
///
/// Only `status_code` sets the response status. `status` and the nested
/// response status are ignored here.
pub async fn respond<R: IStackResolver>(
    reporter: &Reporter<R>,
    descriptor: &ErrorDescriptor,
) -> HttpErrorResponse {
    reporter.report(descriptor).await;
    HttpErrorResponse {
        status: descriptor
            .status_code
            .unwrap_or(DEFAULT_HTTP_RESPONSE_STATUS),
        body: ErrorBody {
            error: descriptor.message.clone(),
        },
    }
}
