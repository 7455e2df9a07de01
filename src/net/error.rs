//! Error taxonomy and backend error-payload normalization.
//!
//! DESIGN
//! ======
//! The backend answers failures with `{ "detail": string | [{msg, loc}] }`.
//! That union is decoded into [`ErrorDetail`] once, and every wrapper turns a
//! failed exchange into one [`ApiError`] whose `Display` is the message shown
//! next to the triggering control.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// One entry of a structured validation error list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub loc: serde_json::Value,
}

/// The `detail` field of a backend error body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    ValidationErrors(Vec<ValidationIssue>),
}

impl ErrorDetail {
    /// The single human-readable message, preferring the first structured entry.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text.as_str()).filter(|t| !t.trim().is_empty()),
            Self::ValidationErrors(issues) => issues.first().and_then(|issue| issue.msg.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// Decode the `detail` of an error body. `None` when the body is not JSON or
/// carries no recognizable detail.
pub fn parse_error_detail(body: &str) -> Option<ErrorDetail> {
    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

/// Failure of a remote call or of the input validation guarding it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response. `message` is the normalized detail, status text, or fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Client-side validation rejected the input before any request was made.
    #[error("{0}")]
    Validation(String),
    /// Called while rendering on the server, where no browser session exists.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for response errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Build the error for a non-2xx response.
///
/// Message precedence: body `detail`, then HTTP status text, then `fallback`.
pub fn error_from_response(status: u16, status_text: &str, body: &str, fallback: &str) -> ApiError {
    let message = parse_error_detail(body)
        .and_then(|detail| detail.message().map(str::to_owned))
        .or_else(|| Some(status_text.trim()).filter(|t| !t.is_empty()).map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, message }
}
