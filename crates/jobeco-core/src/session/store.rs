//! Session persistence on top of a `KeyValueStore`.

use super::model::{Session, UserIdentity};
use super::repository::KeyValueStore;
use crate::error::Result;
use std::sync::Arc;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the user record as JSON text.
pub const USER_KEY: &str = "user";

/// Reads and writes the persisted session.
///
/// Responsibilities:
/// - Serialize a `Session` into the `token` and `user` keys
/// - Restore it, treating anything incomplete or malformed as "no session"
///
/// Does NOT:
/// - Validate or refresh tokens (a token is trusted until the backend rejects it)
/// - Hold the in-memory session (see `SessionContext`)
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Restores the persisted session.
    ///
    /// Returns `None` when either key is missing, when the user record is
    /// not valid JSON of the expected shape, or when the store cannot be
    /// read. Never fails.
    pub fn restore(&self) -> Option<Session> {
        let token = match self.kv.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("Failed to read persisted token: {}", e);
                return None;
            }
        };

        let user_text = match self.kv.get(USER_KEY) {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("Failed to read persisted user record: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<UserIdentity>(&user_text) {
            Ok(user) => Some(Session::new(token, user)),
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted user record: {}", e);
                None
            }
        }
    }

    /// Persists both the token and the user record.
    pub fn save(&self, session: &Session) -> Result<()> {
        let user_text = serde_json::to_string(&session.user)?;
        self.kv
            .set_many(&[(TOKEN_KEY, session.token.as_str()), (USER_KEY, user_text.as_str())])
    }

    /// Removes both persisted fields.
    pub fn clear(&self) -> Result<()> {
        self.kv.remove_many(&[TOKEN_KEY, USER_KEY])
    }
}
