//! Authenticated request gateway.
//!
//! Every request that needs the session goes through here, so that a 401
//! is handled in exactly one place.

use crate::transport::{
    AUTHORIZATION, ApiRequest, ApiResponse, CONTENT_TYPE, Headers, HttpTransport,
    JSON_CONTENT_TYPE, RequestOptions,
};
use jobeco_core::error::{JobecoError, Result};
use jobeco_core::session::SessionContext;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Result of a gateway request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// Any response other than 401, unmodified
    Response(ApiResponse),
    /// The backend rejected the token; the session has been cleared
    SessionInvalid,
}

#[derive(Clone)]
pub struct AuthenticatedGateway {
    transport: Arc<dyn HttpTransport>,
    session: SessionContext,
}

impl AuthenticatedGateway {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionContext) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Sends `options` to `path` with the session token attached.
    ///
    /// Headers are merged in order, last write wins: the JSON content type,
    /// then `Authorization: Bearer <token>` when a session exists, then the
    /// caller's headers.
    ///
    /// A 401 clears the session and yields `SessionInvalid`. Other statuses
    /// come back untouched. Transport failures are `Err(Network)` and leave
    /// the session alone.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<GatewayOutcome> {
        let request = self.prepare(path, options).await;
        let response = self.transport.send(request).await?;
        Ok(self.finish(path, response).await)
    }

    /// Like `request`, but gives up with `Err(Cancelled)` once `cancel` fires.
    ///
    /// A cancelled request never touches the session, even if its response
    /// was a 401.
    pub async fn request_with_cancel(
        &self,
        path: &str,
        options: RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<GatewayOutcome> {
        if cancel.is_cancelled() {
            return Err(JobecoError::Cancelled);
        }

        let request = self.prepare(path, options).await;
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(JobecoError::Cancelled),
            response = self.transport.send(request) => response?,
        };

        if cancel.is_cancelled() {
            tracing::debug!(path, "Discarding response of cancelled request");
            return Err(JobecoError::Cancelled);
        }
        Ok(self.finish(path, response).await)
    }

    async fn prepare(&self, path: &str, options: RequestOptions) -> ApiRequest {
        let mut headers = Headers::new().with(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(session) = self.session.current().await {
            headers.insert(AUTHORIZATION, session.bearer());
        }
        if options.headers.contains(AUTHORIZATION) {
            tracing::warn!(path, "Caller-supplied Authorization header replaces the session token");
        }
        headers.merge(options.headers);

        ApiRequest {
            method: options.method,
            path: path.to_string(),
            headers,
            body: options.body,
        }
    }

    async fn finish(&self, path: &str, response: ApiResponse) -> GatewayOutcome {
        if response.is_unauthorized() {
            tracing::info!(path, "Backend rejected the session token; clearing session");
            self.session.invalidate().await;
            GatewayOutcome::SessionInvalid
        } else {
            GatewayOutcome::Response(response)
        }
    }
}
