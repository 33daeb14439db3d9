//! Failure classification for requests against the portal API.
//!
//! ERROR HANDLING
//! ==============
//! Request helpers return `Result<_, ApiError>` so callers can branch on the
//! one status that changes behavior (401) without string matching, while
//! every other failure still carries enough detail for logging and
//! user-facing messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of a portal API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session cookie (HTTP 401).
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-success status, with the response message when readable.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Browser-only call reached on the server-rendered path.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True for the one status that drives retry and login-redirect behavior.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Classify a non-success HTTP response by status code.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status { status, message: response_message(body) }
        }
    }
}

/// Extract the human-readable message from an error response body.
///
/// The server answers some failures with plain text (`"User already exists"`)
/// and others with a JSON object carrying a `message` or `error` field.
pub(crate) fn response_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_owned();
            }
        }
    }
    body.trim().to_owned()
}
