//! Path management for jobeco files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/jobeco/        # Config directory (dirs::config_dir)
//! ├── config.toml          # Client configuration
//! └── session.toml         # Persisted session (token + user record)
//! ```
//!
//! Every path can be rebased onto another directory, which is how tests and
//! the `--config-dir` flag keep away from the real home directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "jobeco";
const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for jobeco_core::JobecoError {
    fn from(err: PathError) -> Self {
        jobeco_core::JobecoError::config(err.to_string())
    }
}

/// Resolves the files jobeco reads and writes.
#[derive(Debug, Clone)]
pub struct JobecoPaths {
    base: Option<PathBuf>,
}

impl JobecoPaths {
    /// Creates a resolver. With `Some(base)` every file lives directly
    /// under `base`; with `None` the platform config dir is used.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the jobeco configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/jobeco/`
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the path to the persisted session.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer token; it is written with mode 600 on Unix.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(SESSION_FILE))
    }
}

impl Default for JobecoPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
