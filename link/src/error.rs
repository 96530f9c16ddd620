//! Error types for jobdeck-link.

use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LinkError>;

/// Errors that can occur when talking to the job-board API
#[derive(Debug)]
pub enum LinkError {
    /// Transport-level failure (connect, timeout, body read)
    NetworkError(String),

    /// Invalid credentials, or a missing/expired/malformed token
    AuthenticationError(String),

    /// A mutating call attempted without the admin role
    AuthorizationError(String),

    /// A required field was empty
    ValidationError(String),

    /// JSON encode/decode failure
    SerializationError(String),

    /// Client or storage misconfiguration
    ConfigurationError(String),

    /// The requested record does not exist
    NotFound(String),

    /// Non-2xx response from the server
    ServerError { status_code: u16, message: String },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LinkError::AuthenticationError(msg) => write!(f, "Authentication error: {}", msg),
            LinkError::AuthorizationError(msg) => write!(f, "Not allowed: {}", msg),
            LinkError::ValidationError(msg) => write!(f, "Invalid input: {}", msg),
            LinkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            LinkError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            LinkError::NotFound(msg) => write!(f, "Not found: {}", msg),
            LinkError::ServerError {
                status_code,
                message,
            } => write!(f, "Server error ({}): {}", status_code, message),
        }
    }
}

impl std::error::Error for LinkError {}

impl From<reqwest::Error> for LinkError {
    fn from(err: reqwest::Error) -> Self {
        LinkError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkError::ValidationError("title is required".into());
        assert_eq!(err.to_string(), "Invalid input: title is required");

        let err = LinkError::ServerError {
            status_code: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}
