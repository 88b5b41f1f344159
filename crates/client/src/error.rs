//! Transport errors for the remote clinic service
//!
//! None of these reach the user: stores log them and leave their
//! in-memory collections untouched.

use thiserror::Error;

/// Errors that can occur when talking to the remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, reset, DNS, ...).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// Failed to deserialise a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// An endpoint URL could not be built from the base URL.
    #[error("Invalid endpoint URL: {0}")]
    Url(String),
}

impl ClientError {
    /// HTTP status of a server-side failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = ClientError::Status {
            status: 404,
            body: "no existe".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "API error (404): no existe");
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = ClientError::Parse("expected an array".to_string());
        assert_eq!(err.status(), None);
    }
}
