//! Storage layer: atomic file writes and the file-backed key-value store.

mod atomic_toml;
mod file_store;

pub use atomic_toml::AtomicTomlFile;
pub use file_store::FileKeyValueStore;
