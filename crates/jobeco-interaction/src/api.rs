//! Typed client for the job board backend.

use crate::dto::{HealthResponse, JobsResponse, LoginResponse, MeResponse, MessageResponse};
use crate::gateway::{AuthenticatedGateway, GatewayOutcome};
use crate::transport::{
    ApiRequest, ApiResponse, CONTENT_TYPE, Headers, HttpTransport, JSON_CONTENT_TYPE, Method,
    RequestOptions,
};
use jobeco_core::auth::{Credentials, extract_error_message};
use jobeco_core::error::{JobecoError, Result};
use jobeco_core::job::JobListing;
use jobeco_core::session::SessionContext;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const JOBS_PATH: &str = "/jobs";
pub const ME_PATH: &str = "/me";
pub const HEALTH_PATH: &str = "/health";

/// Message for a failed `/jobs` fetch whose body carries no detail.
const SERVER_ERROR: &str = "Server error";

/// Outcome of a call that needs a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorized<T> {
    Ok(T),
    /// The backend answered 401; the session is gone
    SessionInvalid,
}

/// Backend API client.
///
/// `/login`, `/register` and `/health` go straight to the transport; every
/// other endpoint goes through the `AuthenticatedGateway`.
#[derive(Clone)]
pub struct JobBoardApi {
    transport: Arc<dyn HttpTransport>,
    gateway: AuthenticatedGateway,
}

impl JobBoardApi {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionContext) -> Self {
        let gateway = AuthenticatedGateway::new(transport.clone(), session);
        Self { transport, gateway }
    }

    pub fn gateway(&self) -> &AuthenticatedGateway {
        &self.gateway
    }

    pub fn session(&self) -> &SessionContext {
        self.gateway.session()
    }

    /// `POST /login`. Does not touch the session; callers establish it.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response = self.post_credentials(LOGIN_PATH, credentials).await?;
        let parsed: LoginResponse = response.json()?;
        if parsed.access_token.is_empty() {
            return Err(JobecoError::Serialization {
                format: "JSON".to_string(),
                message: "Login response carried an empty access token".to_string(),
            });
        }
        Ok(parsed)
    }

    /// `POST /register`.
    pub async fn register(&self, credentials: &Credentials) -> Result<MessageResponse> {
        let response = self.post_credentials(REGISTER_PATH, credentials).await?;
        // The body is informational only
        Ok(response.json().unwrap_or_default())
    }

    /// `GET /jobs` with the session token.
    pub async fn fetch_jobs(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Authorized<Vec<JobListing>>> {
        let outcome = self
            .gateway
            .request_with_cancel(JOBS_PATH, RequestOptions::get(), cancel)
            .await?;

        match outcome {
            GatewayOutcome::SessionInvalid => Ok(Authorized::SessionInvalid),
            GatewayOutcome::Response(response) => {
                let body: JobsResponse = parse_success(response, SERVER_ERROR)?;
                let jobs = body.into_jobs();
                tracing::debug!(count = jobs.len(), "Fetched jobs");
                Ok(Authorized::Ok(jobs))
            }
        }
    }

    /// `GET /me` with the session token.
    pub async fn me(&self) -> Result<Authorized<MeResponse>> {
        match self.gateway.request(ME_PATH, RequestOptions::get()).await? {
            GatewayOutcome::SessionInvalid => Ok(Authorized::SessionInvalid),
            GatewayOutcome::Response(response) => {
                let status = response.status;
                Ok(Authorized::Ok(parse_success(
                    response,
                    &jobeco_core::auth::fallback_message(status),
                )?))
            }
        }
    }

    /// `GET /health`. No session involved.
    pub async fn health(&self) -> Result<HealthResponse> {
        let request = ApiRequest {
            method: Method::Get,
            path: HEALTH_PATH.to_string(),
            headers: Headers::new(),
            body: None,
        };
        let response = self.transport.send(request).await?;
        let status = response.status;
        parse_success(response, &jobeco_core::auth::fallback_message(status))
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<ApiResponse> {
        let request = ApiRequest {
            method: Method::Post,
            path: path.to_string(),
            headers: Headers::new().with(CONTENT_TYPE, JSON_CONTENT_TYPE),
            body: Some(serde_json::to_value(credentials)?),
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = extract_error_message(response.status, &response.body);
            tracing::debug!(path, status = response.status, "Credential request rejected");
            return Err(JobecoError::http(response.status, message));
        }
        Ok(response)
    }
}

/// Parses a 2xx body, or turns any other status into `Err(Http)`.
///
/// For error statuses the message comes from the body when it has one,
/// `fallback` otherwise.
fn parse_success<T: serde::de::DeserializeOwned>(response: ApiResponse, fallback: &str) -> Result<T> {
    if response.is_success() {
        return response.json();
    }

    let extracted = extract_error_message(response.status, &response.body);
    let message = if extracted == jobeco_core::auth::fallback_message(response.status) {
        fallback.to_string()
    } else {
        extracted
    };
    Err(JobecoError::http(response.status, message))
}
