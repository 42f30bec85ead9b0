//! Shared, explicitly passed session handle.

use super::model::Session;
use super::store::SessionStore;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The in-memory session, shared between the request gateway and the use cases.
///
/// The in-memory copy is the source of truth while the process runs. The
/// `SessionStore` is only touched at the edges: once at `load`, and on every
/// change (`establish`, `invalidate`).
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Clone)]
pub struct SessionContext {
    current: Arc<RwLock<Option<Session>>>,
    store: SessionStore,
}

impl SessionContext {
    /// Creates a context and restores the persisted session, if any.
    pub fn load(store: SessionStore) -> Self {
        let restored = store.restore();
        if let Some(session) = &restored {
            tracing::debug!(email = %session.user.email, "Restored persisted session");
        }
        Self {
            current: Arc::new(RwLock::new(restored)),
            store,
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Persists the session and makes it current.
    ///
    /// If persisting fails the context stays as it was.
    pub async fn establish(&self, session: Session) -> Result<()> {
        self.store.save(&session)?;
        tracing::debug!(email = %session.user.email, "Session established");
        *self.current.write().await = Some(session);
        Ok(())
    }

    /// Drops the session from memory and from the store.
    ///
    /// Store failures are logged; the in-memory session is cleared regardless.
    pub async fn invalidate(&self) {
        let previous = self.current.write().await.take();
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
        if let Some(session) = previous {
            tracing::debug!(email = %session.user.email, "Session invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::memory_store::MemoryKeyValueStore;
    use crate::session::model::UserIdentity;
    use crate::session::repository::KeyValueStore;
    use crate::session::store::{TOKEN_KEY, USER_KEY};

    fn context_over(kv: Arc<MemoryKeyValueStore>) -> SessionContext {
        SessionContext::load(SessionStore::new(kv))
    }

    #[tokio::test]
    async fn test_load_restores_persisted_session() {
        let kv = Arc::new(MemoryKeyValueStore::with_entries([
            (TOKEN_KEY, "T"),
            (USER_KEY, r#"{"email":"a@b.com"}"#),
        ]));
        let ctx = context_over(kv);

        assert!(ctx.is_authenticated().await);
        assert_eq!(ctx.token().await.as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_establish_persists_and_shares() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let ctx = context_over(kv.clone());
        let other = ctx.clone();

        ctx.establish(Session::new("T", UserIdentity::new("a@b.com")))
            .await
            .unwrap();

        assert_eq!(other.token().await.as_deref(), Some("T"));
        assert_eq!(kv.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_invalidate_clears_memory_and_store() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let ctx = context_over(kv.clone());
        ctx.establish(Session::new("T", UserIdentity::new("a@b.com")))
            .await
            .unwrap();

        ctx.invalidate().await;

        assert!(!ctx.is_authenticated().await);
        assert!(kv.is_empty());
    }
}
