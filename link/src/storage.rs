//! Persisted key/value storage for sessions and the job cache.
//!
//! The job-board client keeps two JSON-encoded records between runs: the
//! current session and a denormalized copy of the job collection. The
//! [`Storage`] trait abstracts where those records live so the CLI can use
//! files while tests use memory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinkError, Result};

/// Key/value storage for JSON-encoded records.
///
/// Implementations MUST treat a missing key as `Ok(None)` and MUST replace
/// values wholesale on `set` — there is no partial write.
pub trait Storage {
    /// Read the value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed storage: one JSON file per key under a root directory.
///
/// Defaults to `~/.config/jobdeck/`. Files are written with 0600 permissions
/// on Unix since the session record contains a bearer token.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Default storage root: `~/.config/jobdeck/`
    pub fn default_root() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("jobdeck")
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("jobdeck")
        } else {
            PathBuf::from(".jobdeck")
        }
    }

    /// Create a store at the default location
    pub fn new() -> Self {
        Self::with_root(Self::default_root())
    }

    /// Create a store rooted at a custom directory
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// The directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| {
            LinkError::ConfigurationError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            LinkError::ConfigurationError(format!(
                "failed to create storage directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| {
            LinkError::ConfigurationError(format!(
                "failed to write '{}': {}",
                path.display(),
                e
            ))
        })?;

        // The session record holds a bearer token; owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, permissions).map_err(|e| {
                LinkError::ConfigurationError(format!(
                    "failed to set permissions on '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LinkError::ConfigurationError(format!(
                "failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Does NOT persist across restarts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
