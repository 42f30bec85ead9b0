#![allow(dead_code)]

use async_trait::async_trait;
use jobeco_application::AppContext;
use jobeco_core::config::ClientConfig;
use jobeco_core::error::{JobecoError, Result};
use jobeco_core::session::{KeyValueStore, MemoryKeyValueStore, TOKEN_KEY, USER_KEY};
use jobeco_interaction::{ApiRequest, ApiResponse, HttpTransport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays scripted responses and records every request it sees.
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(self: &Arc<Self>, status: u16, body: serde_json::Value) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::json_body(status, &body)));
        self.clone()
    }

    pub fn fail(self: &Arc<Self>, message: &str) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(JobecoError::network(message)));
        self.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for ScriptedBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(JobecoError::internal("no scripted response")))
    }
}

pub fn app(backend: Arc<ScriptedBackend>, kv: Arc<MemoryKeyValueStore>) -> AppContext {
    AppContext::with_parts(backend, kv, ClientConfig::default())
}

/// A store that already holds a session for `a@b.com`.
pub fn persisted_session(token: &str) -> Arc<MemoryKeyValueStore> {
    let kv = Arc::new(MemoryKeyValueStore::new());
    kv.set(TOKEN_KEY, token).unwrap();
    kv.set(USER_KEY, r#"{"email":"a@b.com"}"#).unwrap();
    kv
}

pub fn jobs_body() -> serde_json::Value {
    serde_json::json!({"jobs": [
        {"title": "Backend Engineer", "company": "Acme", "location": "Remote"},
        {"title": "Data Analyst", "company": "Acme", "location": "NYC"},
        {"title": "Designer", "company": "Beta", "location": "Remote"}
    ]})
}
