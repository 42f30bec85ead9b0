//! Wiring of the concrete infrastructure behind the use cases.

use crate::dashboard::Dashboard;
use crate::login_flow::LoginFlow;
use jobeco_core::config::ClientConfig;
use jobeco_core::error::Result;
use jobeco_core::session::{KeyValueStore, SessionContext, SessionStore};
use jobeco_infrastructure::{ConfigService, FileKeyValueStore, JobecoPaths};
use jobeco_interaction::{HttpTransport, JobBoardApi, ReqwestTransport};
use std::sync::Arc;

/// Everything a host needs to run the client.
///
/// Built once at startup. The session is restored from the store here and
/// shared by every flow created afterwards.
#[derive(Clone)]
pub struct AppContext {
    config: ClientConfig,
    session: SessionContext,
    api: JobBoardApi,
}

impl AppContext {
    /// Loads config from `paths`, restores the persisted session and builds
    /// the HTTP client. `base_url` beats both the file and the environment.
    pub fn bootstrap(paths: &JobecoPaths, base_url: Option<&str>) -> Result<Self> {
        let mut config = ConfigService::new(paths)?.get_config()?;
        if let Some(base_url) = base_url {
            config = config.with_base_url(base_url);
        }

        let kv = FileKeyValueStore::new(paths)?;
        tracing::debug!(path = %kv.path().display(), "Using session file");

        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_parts(Arc::new(transport), Arc::new(kv), config))
    }

    /// Assembles a context from explicit parts.
    pub fn with_parts(
        transport: Arc<dyn HttpTransport>,
        kv: Arc<dyn KeyValueStore>,
        config: ClientConfig,
    ) -> Self {
        let session = SessionContext::load(SessionStore::new(kv));
        let api = JobBoardApi::new(transport, session.clone());
        Self {
            config,
            session,
            api,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn api(&self) -> &JobBoardApi {
        &self.api
    }

    pub fn login_flow(&self) -> LoginFlow {
        LoginFlow::new(self.api.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.api.clone())
    }
}
