//! Response Schemas
//!
//! Explicit shapes of the bodies the API returns, checked at the boundary.

use serde::Deserialize;

/// `{ "data": [...] }` returned by the list endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<E> {
    pub data: Option<Vec<E>>,
}

/// `{ "success": true }` returned by `/auth/signup`
#[derive(Debug, Deserialize)]
pub(crate) struct SignUpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body: `{ "message": ... }`, or `{ "error": ... }` on some auth routes
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort message from a raw error body
    pub fn message_from(raw: &str) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(raw).ok()?;
        body.message
            .or(body.error)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}
