//! Error Types
//!
//! Remote API, storage and configuration failures. Client-side form
//! validation failures live in `domain::FieldErrors`.

use thiserror::Error;

/// Failure of a call against the remote API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session token was held; raised before any network I/O.
    #[error("Missing authorization token")]
    Auth,
    /// Transport failure (DNS, connection refused, CORS, aborted fetch).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with the server-provided message if the body had one.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server attached to the failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True when the session should be considered gone
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Auth | Self::Server { status: 401, .. })
    }

    /// User-facing notice text: the server message, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: None,
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Durable storage failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Invalid application configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Title already taken".to_string()),
        };
        assert_eq!(err.user_message("Failed to create todo"), "Title already taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Auth.user_message("Failed to delete todo"), "Failed to delete todo");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("An error occurred"),
            "An error occurred"
        );
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Auth.is_unauthorized());
        assert!(ApiError::Server { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Server { status: 500, message: None }.is_unauthorized());
        assert!(!ApiError::Decode("bad".into()).is_unauthorized());
    }
}
