//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers of the raw
//! builder/parser frequently distinguish "the hero does not exist" from "the
//! server returned an unexpected status." All other non-2xx responses land in
//! `Status` with the raw status code and body for debugging. `Transport`
//! displays as the bare message so the client's failure log reads
//! `addHero failed: Network Error` rather than wrapping it twice.

use thiserror::Error;

/// Errors produced while building, sending, or parsing a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport never produced a response.
    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_bare_message() {
        let err = ApiError::Transport("Network Error".to_string());
        assert_eq!(err.to_string(), "Network Error");
    }

    #[test]
    fn status_error_includes_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
