//! Configuration file management.
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "http://localhost:8080"  # job-board server URL
//! timeout = 30                   # request timeout in seconds
//!
//! [ui]
//! format = "table"               # table, json
//! color = true
//! ```
//!
//! Every section and field is optional; CLI flags take precedence over the
//! file, and a missing file is simply the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};

/// CLI configuration loaded from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CLIConfiguration {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// UI preferences
    pub ui: Option<UIConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server URL (e.g., http://localhost:8080)
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Output format: table, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_timeout() -> u64 {
    30
}

fn default_format() -> String {
    "table".to_string()
}

fn default_color() -> bool {
    true
}

impl CLIConfiguration {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults rather than an error.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded = Self::expand_tilde(path);
        if !expanded.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&expanded).map_err(|e| {
            CLIError::ConfigurationError(format!("failed to read {}: {}", expanded.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Expand a leading `~/` to the user's home directory
    fn expand_tilde(path: &Path) -> PathBuf {
        if let Ok(stripped) = path.strip_prefix("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        path.to_path_buf()
    }

    /// Configured server URL, if any
    pub fn server_url(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.url.as_deref())
    }

    /// Configured request timeout in seconds
    pub fn timeout(&self) -> Option<u64> {
        self.server.as_ref().map(|s| s.timeout)
    }

    /// Configured output format name ("table" when unset)
    pub fn format(&self) -> &str {
        self.ui.as_ref().map(|u| u.format.as_str()).unwrap_or("table")
    }

    /// Whether colored output is enabled (true when unset)
    pub fn color(&self) -> bool {
        self.ui.as_ref().map(|u| u.color).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = CLIConfiguration::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.server_url().is_none());
        assert_eq!(config.format(), "table");
        assert!(config.color());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[server]
url = "https://jobs.example.com"
timeout = 10

[ui]
format = "json"
color = false
"#,
        )
        .unwrap();

        let config = CLIConfiguration::load(&path).unwrap();
        assert_eq!(config.server_url(), Some("https://jobs.example.com"));
        assert_eq!(config.timeout(), Some(10));
        assert_eq!(config.format(), "json");
        assert!(!config.color());
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server]\nurl = \"http://localhost:9000\"\n").unwrap();

        let config = CLIConfiguration::load(&path).unwrap();
        assert_eq!(config.server_url(), Some("http://localhost:9000"));
        assert_eq!(config.timeout(), Some(30));
        assert_eq!(config.format(), "table");
    }

    #[test]
    fn test_unreadable_file_is_a_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the config path exists but cannot be read as a file
        let path = temp_dir.path().join("config.toml");
        fs::create_dir(&path).unwrap();

        let err = CLIConfiguration::load(&path).unwrap_err();
        assert!(matches!(err, CLIError::ConfigurationError(_)));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server\nurl =").unwrap();

        assert!(CLIConfiguration::load(&path).is_err());
    }
}
