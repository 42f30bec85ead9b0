//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session` and `UserIdentity`
//! - `repository`: `KeyValueStore` persistence trait
//! - `store`: `SessionStore` (restore/save/clear over a `KeyValueStore`)
//! - `context`: `SessionContext`, the shared in-memory session handle
//! - `memory_store`: volatile `KeyValueStore`
//!
//! # Usage
//!
//! ```ignore
//! use jobeco_core::session::{SessionContext, SessionStore, MemoryKeyValueStore};
//!
//! let store = SessionStore::new(Arc::new(MemoryKeyValueStore::new()));
//! let ctx = SessionContext::load(store);
//! ```

mod context;
mod memory_store;
mod model;
mod repository;
mod store;

// Re-export public API
pub use context::SessionContext;
pub use memory_store::MemoryKeyValueStore;
pub use model::{Session, UserIdentity};
pub use repository::KeyValueStore;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
