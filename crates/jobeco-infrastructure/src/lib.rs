//! Infrastructure layer: file locations, file-backed session persistence,
//! configuration loading.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::JobecoPaths;
pub use crate::storage::FileKeyValueStore;
