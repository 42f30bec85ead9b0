//! File-backed key-value store.

use super::atomic_toml::AtomicTomlFile;
use crate::paths::JobecoPaths;
use jobeco_core::error::Result;
use jobeco_core::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

type Table = BTreeMap<String, String>;

/// `KeyValueStore` persisted as a flat TOML table.
///
/// ```toml
/// token = "eyJhbGciOi..."
/// user = '{"email":"a@b.com"}'
/// ```
///
/// Every mutation is a locked read-modify-write of the whole file, so
/// concurrent `jobeco` processes never lose each other's keys. A file that
/// no longer parses reads as an error but is overwritten by the next write.
pub struct FileKeyValueStore {
    file: AtomicTomlFile<Table>,
}

impl FileKeyValueStore {
    /// Store at the default session location (`~/.config/jobeco/session.toml`).
    pub fn new(paths: &JobecoPaths) -> Result<Self> {
        Ok(Self::with_path(paths.session_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn table(&self) -> Result<Table> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_many(&[key])
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.file.update_or_reset(Table::new(), |table| {
            for (key, value) in entries {
                table.insert(key.to_string(), value.to_string());
            }
            Ok(())
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update_or_reset(Table::new(), |table| {
            for key in keys {
                table.remove(*key);
            }
            Ok(())
        })?;
        tracing::debug!(path = %self.file.path().display(), "Removed {} key(s)", keys.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobeco_core::session::{Session, SessionStore, UserIdentity};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        FileKeyValueStore::with_path(path.clone())
            .set("token", "T")
            .unwrap();

        let reopened = FileKeyValueStore::with_path(path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("T"));
        assert_eq!(reopened.get("user").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::with_path(temp_dir.path().join("session.toml"));
        store.remove("token").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_json_text_round_trips_through_toml() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::with_path(temp_dir.path().join("session.toml"));
        let json = r#"{"email":"a@b.com","note":"quote ' and \" inside"}"#;

        store.set("user", json).unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some(json));
    }

    #[test]
    fn test_session_store_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        let sessions = SessionStore::new(Arc::new(FileKeyValueStore::with_path(path.clone())));

        sessions
            .save(&Session::new("T", UserIdentity::new("a@b.com")))
            .unwrap();

        let restored = SessionStore::new(Arc::new(FileKeyValueStore::with_path(path.clone())))
            .restore()
            .unwrap();
        assert_eq!(restored.token, "T");
        assert_eq!(restored.user.email, "a@b.com");

        sessions.clear().unwrap();
        let table: toml::Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_corrupt_file_restores_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        std::fs::write(&path, "token = [unterminated").unwrap();

        let sessions = SessionStore::new(Arc::new(FileKeyValueStore::with_path(path)));
        assert!(sessions.restore().is_none());
    }

    #[test]
    fn test_login_over_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        std::fs::write(&path, "token = [unterminated").unwrap();
        let sessions = SessionStore::new(Arc::new(FileKeyValueStore::with_path(path.clone())));
        assert!(sessions.restore().is_none());

        sessions
            .save(&Session::new("T", UserIdentity::new("a@b.com")))
            .unwrap();

        let restored = sessions.restore().unwrap();
        assert_eq!(restored.token, "T");
        assert_eq!(restored.user.email, "a@b.com");
    }

    #[test]
    fn test_clear_over_corrupt_file_rewrites_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        std::fs::write(&path, "token = [unterminated").unwrap();
        let sessions = SessionStore::new(Arc::new(FileKeyValueStore::with_path(path.clone())));

        sessions.clear().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("unterminated"));
        let table: toml::Table = toml::from_str(&content).unwrap();
        assert!(table.is_empty());
    }
}
