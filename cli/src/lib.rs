//! Library entry point for jobdeck-cli components.
//!
//! Exposes reusable modules (formatter, config, error) so integration tests
//! can exercise CLI formatting and configuration without going through the
//! binary entry point.

pub mod config;
pub mod error;
pub mod formatter;

pub use config::CLIConfiguration;
pub use error::{CLIError, Result};
pub use formatter::{OutputFormat, OutputFormatter};
