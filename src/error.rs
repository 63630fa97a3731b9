//! Error types for the ForTem API client.
//!
//! This module provides the error type returned by every fallible operation
//! in this crate, from transport failures to authentication errors to
//! non-success API responses.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for ForTem operations.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP status the API uses to report a consumed or expired access token.
pub const TOKEN_EXPIRED_STATUS: u16 = 403;

/// HTTP status the API uses to report an invalid API key or credentials.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Error code reported by [`Error::code`] for authentication failures.
pub const AUTH_ERROR_CODE: &str = "AUTH_ERROR";

/// The main error type for all ForTem API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Authentication failed (HTTP 401, or a missing nonce)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client construction failed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if the API rejected the access token as consumed or
    /// expired.
    ///
    /// The client already retries such responses once with a fresh token, so
    /// seeing this error means the retry was rejected as well.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status == TOKEN_EXPIRED_STATUS)
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Authentication(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status associated with this error, if any.
    ///
    /// Authentication errors always report 401, including the ones raised
    /// locally before any request was sent.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Authentication(_) => Some(UNAUTHORIZED_STATUS),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server-supplied error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            Error::Authentication(_) => Some(AUTH_ERROR_CODE),
            _ => None,
        }
    }

    /// Create an error from a non-success response body.
    ///
    /// The message is taken from the `message` field, then the `error`
    /// field, and is synthesized from the status otherwise. A field counts as
    /// present unless it is missing or `null`, whatever its JSON type.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(render_field)
            .or_else(|| body.get("error").and_then(render_field))
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        if status == UNAUTHORIZED_STATUS {
            return Error::Authentication(message);
        }

        let code = body.get("code").and_then(render_field);

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}

/// Render an error-body field as text; `None` for `null`.
///
/// Strings are used as-is and arrays are joined with `,`, so validation
/// errors reported as a list of messages keep every entry.
fn render_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| render_field(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}
