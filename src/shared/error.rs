//! Auth Flow Error Types
//!
//! Errors produced by the submission client. Client-side validation never
//! reaches this type; it is reported inline through the form's
//! `ValidationErrors` map before any request is made. Everything here is
//! recovered at the screen level and shown as a dismissible alert (server
//! validation errors are additionally merged back into the form).
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.
use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced by a login, sign-up or social-login submission
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    /// Backend rejected the request with per-field validation messages
    #[error("{}", summarize(.errors))]
    ServerValidation {
        /// Field name to messages, as returned by the backend
        errors: BTreeMap<String, Vec<String>>,
    },

    /// Backend rejected the request with a single message
    #[error("{message}")]
    Server {
        /// Human-readable error message
        message: String,
    },

    /// Request never completed (connectivity failure or timeout)
    #[error("Network error. Please check your internet connection and try again.")]
    Network,

    /// Response body was not the JSON we expected
    #[error("Invalid response from server")]
    MalformedResponse,
}

impl AuthError {
    /// Create a server error, falling back to `fallback` when the backend
    /// gave no message
    pub fn server(message: Option<String>, fallback: &str) -> Self {
        Self::Server {
            message: message.unwrap_or_else(|| fallback.to_string()),
        }
    }
}

fn summarize(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_uses_backend_message() {
        let error = AuthError::server(Some("bad credentials".to_string()), "Login failed");
        assert_eq!(error.to_string(), "bad credentials");
    }

    #[test]
    fn test_server_error_falls_back() {
        let error = AuthError::server(None, "Registration failed");
        assert_eq!(error.to_string(), "Registration failed");
    }

    #[test]
    fn test_server_validation_summary_joins_messages() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "email".to_string(),
            vec!["The email has already been taken.".to_string()],
        );
        errors.insert(
            "phone".to_string(),
            vec!["The phone is invalid.".to_string()],
        );
        let error = AuthError::ServerValidation { errors };
        assert_eq!(
            error.to_string(),
            "The email has already been taken.\nThe phone is invalid."
        );
    }

    #[test]
    fn test_network_error_message() {
        assert_eq!(
            AuthError::Network.to_string(),
            "Network error. Please check your internet connection and try again."
        );
    }

    #[test]
    fn test_malformed_response_message() {
        assert_eq!(
            AuthError::MalformedResponse.to_string(),
            "Invalid response from server"
        );
    }
}
