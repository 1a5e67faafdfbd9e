//! Error types for the questions API client.
//!
//! # Design
//! The backend reports failure in two ways: it answers with a JSON envelope
//! whose `success` flag is false, or the call never yields a usable envelope
//! at all. The first carries a message meant for humans and lands in
//! `RequestFailed`; everything else (connection refused, non-JSON body, body
//! of the wrong shape) lands in `Transport`.

use std::fmt;

/// Message used when the server reports failure without an `error` field.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch questions";

/// Errors returned by `QuestionsClient` parse methods and `QuestionsSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with `success: false`.
    RequestFailed { message: String, status: u16 },

    /// The request could not be executed or the body was not a usable envelope.
    Transport(String),
}

impl ApiError {
    /// Server-supplied (or default) message for `RequestFailed`, the
    /// underlying description for `Transport`.
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed { message, .. } => message,
            ApiError::Transport(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { message, .. } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_server_message_verbatim() {
        let err = ApiError::RequestFailed {
            message: "Invalid class level. Must be SS2 or SS3".to_string(),
            status: 400,
        };
        assert_eq!(err.to_string(), "Invalid class level. Must be SS2 or SS3");
        assert_eq!(err.message(), "Invalid class level. Must be SS2 or SS3");
    }

    #[test]
    fn transport_is_prefixed() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
