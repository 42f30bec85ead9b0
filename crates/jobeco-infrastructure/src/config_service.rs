//! Configuration service.
//!
//! Loads `ClientConfig` from `config.toml` (~/.config/jobeco/config.toml by
//! default) and applies environment overrides.

use crate::paths::JobecoPaths;
use crate::storage::AtomicTomlFile;
use jobeco_core::config::ClientConfig;
use jobeco_core::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Overrides `base_url` when set.
pub const BASE_URL_ENV: &str = "JOBECO_BASE_URL";

/// Loads and caches the client configuration.
///
/// A missing or empty file yields defaults; a malformed one is an error so
/// that typos do not silently point the client at the wrong backend.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<ClientConfig>>,
    cached: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &JobecoPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            cached: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Returns the configuration, reading the file on first access.
    pub fn get_config(&self) -> Result<ClientConfig> {
        if let Ok(guard) = self.cached.read() {
            if let Some(cached) = guard.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.file.load()?.unwrap_or_default();
        let config = apply_env_overrides(loaded, |key| std::env::var(key).ok());
        tracing::debug!(base_url = %config.base_url, "Loaded client configuration");

        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(config.clone());
        }
        Ok(config)
    }

    /// Writes `config` to the file and refreshes the cache.
    pub fn save_config(&self, config: &ClientConfig) -> Result<()> {
        self.file.save(config)?;
        self.invalidate_cache();
        Ok(())
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
    }
}

/// Applies environment overrides through `lookup`.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }
    config
}
