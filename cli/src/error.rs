//! Error types for jobdeck-cli.
//!
//! Wraps library errors with user-friendly messages. Every failure surfaces
//! as a single notice on stderr and a non-zero exit code; nothing panics the
//! binary.

use jobdeck_link::LinkError;
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the jobdeck-link library
    LinkError(LinkError),

    /// Configuration file error
    ConfigurationError(String),

    /// Bad or missing command input
    InputError(String),

    /// User cancelled operation
    Cancelled,
}

impl CLIError {
    fn format_link_error(err: &LinkError) -> String {
        match err {
            LinkError::NetworkError(msg) => format!("Could not reach the server: {}", msg),
            LinkError::AuthenticationError(msg) => msg.clone(),
            LinkError::AuthorizationError(msg) => msg.clone(),
            LinkError::ValidationError(msg) => msg.clone(),
            LinkError::SerializationError(msg) => msg.clone(),
            LinkError::ConfigurationError(msg) => msg.clone(),
            LinkError::NotFound(msg) => msg.clone(),
            LinkError::ServerError {
                status_code,
                message,
            } => format!("Server error ({}): {}", status_code, message),
        }
    }
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", Self::format_link_error(e)),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::InputError(msg) => write!(f, "{}", msg),
            CLIError::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<LinkError> for CLIError {
    fn from(err: LinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::InputError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}
