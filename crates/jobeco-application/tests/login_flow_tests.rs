mod common;

use common::{ScriptedBackend, app};
use jobeco_application::SubmitOutcome;
use jobeco_core::auth::{AuthMode, FlowState, MISSING_FIELDS_MESSAGE, REGISTERED_MESSAGE};
use jobeco_application::AppContext;
use jobeco_core::config::ClientConfig;
use jobeco_core::session::{KeyValueStore, MemoryKeyValueStore, TOKEN_KEY, USER_KEY};
use jobeco_infrastructure::FileKeyValueStore;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_login_success_persists_session() {
    let backend = ScriptedBackend::new().respond(200, json!({"access_token": "T", "token_type": "bearer"}));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let ctx = app(backend.clone(), kv.clone());
    let mut flow = ctx.login_flow();

    flow.fill(AuthMode::Login, "a@b.com", "pw");
    let outcome = flow.submit().await;

    match outcome {
        SubmitOutcome::LoggedIn(user) => assert_eq!(user.email, "a@b.com"),
        other => panic!("expected login, got {other:?}"),
    }
    assert!(matches!(flow.state(), FlowState::Authenticated(_)));
    assert_eq!(ctx.session().token().await.as_deref(), Some("T"));
    assert_eq!(kv.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));

    let user: serde_json::Value = serde_json::from_str(&kv.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(backend.last_request().path, "/login");
}

#[tokio::test]
async fn test_register_success_returns_to_login_mode() {
    let backend = ScriptedBackend::new().respond(200, json!({"message": "User created"}));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let ctx = app(backend.clone(), kv.clone());
    let mut flow = ctx.login_flow();

    flow.fill(AuthMode::Register, "new@b.com", "pw");
    let outcome = flow.submit().await;

    assert_eq!(outcome, SubmitOutcome::Registered);
    assert_eq!(flow.form().mode(), AuthMode::Login);
    assert_eq!(flow.form().success(), Some(REGISTERED_MESSAGE));
    assert_eq!(flow.form().password(), "");
    assert_eq!(flow.form().email(), "new@b.com");
    assert_eq!(flow.state(), &FlowState::Anonymous);
    assert!(!ctx.session().is_authenticated().await);
    assert!(kv.is_empty());
    assert_eq!(backend.last_request().path, "/register");
}

#[tokio::test]
async fn test_rejected_login_shows_backend_message() {
    let backend = ScriptedBackend::new()
        .respond(401, json!({"detail": "Invalid credentials"}))
        .respond(422, json!({"detail": [{"msg": "field required"}, {"msg": "value is not a valid email"}]}))
        .respond(500, json!({}));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let ctx = app(backend, kv.clone());
    let mut flow = ctx.login_flow();
    flow.fill(AuthMode::Login, "a@b.com", "bad");

    assert_eq!(flow.submit().await, SubmitOutcome::Failed("Invalid credentials".to_string()));
    assert_eq!(flow.form().error(), Some("Invalid credentials"));
    assert_eq!(flow.state(), &FlowState::Anonymous);

    assert_eq!(
        flow.submit().await,
        SubmitOutcome::Failed("field required. value is not a valid email".to_string())
    );
    assert_eq!(
        flow.submit().await,
        SubmitOutcome::Failed("Request failed (500). Is the backend running?".to_string())
    );
    assert!(kv.is_empty());
}

#[tokio::test]
async fn test_network_failure_message() {
    let backend = ScriptedBackend::new().fail("connection refused").fail("");
    let ctx = app(backend, Arc::new(MemoryKeyValueStore::new()));
    let mut flow = ctx.login_flow();
    flow.fill(AuthMode::Login, "a@b.com", "pw");

    assert_eq!(
        flow.submit().await,
        SubmitOutcome::Failed("Network error: connection refused".to_string())
    );
    assert_eq!(flow.submit().await, SubmitOutcome::Failed("Network error".to_string()));
}

#[tokio::test]
async fn test_missing_fields_are_not_sent() {
    let backend = ScriptedBackend::new();
    let ctx = app(backend.clone(), Arc::new(MemoryKeyValueStore::new()));
    let mut flow = ctx.login_flow();
    flow.fill(AuthMode::Login, "  ", "pw");

    assert_eq!(flow.submit().await, SubmitOutcome::Failed(MISSING_FIELDS_MESSAGE.to_string()));
    assert!(backend.paths().is_empty());
    assert_eq!(flow.state(), &FlowState::Anonymous);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = ScriptedBackend::new().respond(200, json!({"access_token": "T"}));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let ctx = app(backend, kv.clone());
    let mut flow = ctx.login_flow();
    flow.fill(AuthMode::Login, "a@b.com", "pw");
    flow.submit().await;

    flow.logout().await;

    assert_eq!(flow.state(), &FlowState::Anonymous);
    assert!(!ctx.session().is_authenticated().await);
    assert!(kv.is_empty());
}

#[tokio::test]
async fn test_login_and_logout_over_corrupt_session_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");
    std::fs::write(&path, "token = [unterminated").unwrap();

    let backend = ScriptedBackend::new().respond(200, json!({"access_token": "T"}));
    let kv = Arc::new(FileKeyValueStore::with_path(path.clone()));
    let ctx = AppContext::with_parts(backend, kv.clone(), ClientConfig::default());
    assert!(!ctx.session().is_authenticated().await);

    let mut flow = ctx.login_flow();
    flow.fill(AuthMode::Login, "a@b.com", "pw");
    assert!(matches!(flow.submit().await, SubmitOutcome::LoggedIn(_)));
    assert_eq!(kv.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));

    ctx.dashboard().logout().await;

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("unterminated"));
    assert_eq!(kv.get(TOKEN_KEY).unwrap(), None);
}
