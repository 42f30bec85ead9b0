#![allow(dead_code)]

use async_trait::async_trait;
use jobeco_core::error::{JobecoError, Result};
use jobeco_core::session::{MemoryKeyValueStore, Session, SessionContext, SessionStore, UserIdentity};
use jobeco_interaction::{ApiRequest, ApiResponse, HttpTransport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Replays scripted responses and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
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

    pub fn respond_raw(self: &Arc<Self>, status: u16, body: &str) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self.clone()
    }

    pub fn fail(self: &Arc<Self>, message: &str) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(JobecoError::network(message)));
        self.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(JobecoError::internal("no scripted response")))
    }
}

/// Holds every request until `release` is called.
pub struct GatedTransport {
    pub gate: Notify,
    pub response: ApiResponse,
}

impl GatedTransport {
    pub fn new(response: ApiResponse) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            response,
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse> {
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}

pub fn anonymous_context() -> (Arc<MemoryKeyValueStore>, SessionContext) {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let ctx = SessionContext::load(SessionStore::new(kv.clone()));
    (kv, ctx)
}

pub async fn logged_in_context(token: &str) -> (Arc<MemoryKeyValueStore>, SessionContext) {
    let (kv, ctx) = anonymous_context();
    ctx.establish(Session::new(token, UserIdentity::new("a@b.com")))
        .await
        .unwrap();
    (kv, ctx)
}
