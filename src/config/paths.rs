//! Path resolution for repflow configuration and data files.
//!
//! All repflow data is stored in `~/.repflow/`:
//! - `config.yaml` - Main configuration file
//! - `repflow.db` - SQLite database for the saved exercise plan

use std::path::PathBuf;

use crate::error::RepflowError;

/// Paths to repflow configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.repflow/`
    pub root: PathBuf,
    /// Config file: `~/.repflow/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.repflow/repflow.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RepflowError> {
        let home = std::env::var("HOME").map_err(|_| {
            RepflowError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".repflow");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("repflow.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("repflow.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RepflowError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RepflowError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".repflow"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-repflow");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("repflow.db"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
