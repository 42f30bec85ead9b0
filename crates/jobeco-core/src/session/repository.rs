//! Key-value persistence trait for session data.

use crate::error::Result;

/// A flat string key-value store that survives process restarts.
///
/// This is the only place session data is persisted. Implementations live
/// in the infrastructure layer (file-backed) or in tests (in-memory).
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Writes several entries at once.
    ///
    /// The default implementation calls `set` for each entry; file-backed
    /// stores override it to write everything in one atomic update.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Removes several keys at once.
    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
