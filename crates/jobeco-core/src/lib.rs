//! Domain layer of the Job Eco System client.
//!
//! Pure models and state machines: no HTTP, no file system. Persistence goes
//! through the `session::KeyValueStore` trait, implemented elsewhere.

pub mod auth;
pub mod config;
pub mod error;
pub mod job;
pub mod listing;
pub mod session;

// Re-export common error type
pub use error::{JobecoError, Result};
