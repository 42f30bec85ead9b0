//! `HttpTransport` over `reqwest`.

use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method};
use async_trait::async_trait;
use jobeco_core::config::ClientConfig;
use jobeco_core::error::{JobecoError, Result};
use reqwest::Client;

/// Talks to the backend configured in `ClientConfig`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| JobecoError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)?;
            builder = builder.body(bytes);
        }

        tracing::debug!(method = request.method.as_str(), url = %url, "Sending request");

        let response = builder.send().await.map_err(|err| {
            JobecoError::network(format!("{} {} failed: {}", request.method.as_str(), url, err))
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| JobecoError::network(format!("Failed to read response body: {err}")))?;

        tracing::debug!(status, url = %url, "Received response");
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
