//! Wire shapes of the backend endpoints.

use jobeco_core::job::JobListing;
use serde::Deserialize;

/// `POST /login` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /register` success body. The backend may also send nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /jobs` success body. A missing or null `jobs` means no jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Option<Vec<JobListing>>,
}

impl JobsResponse {
    pub fn into_jobs(self) -> Vec<JobListing> {
        self.jobs.unwrap_or_default()
    }
}

/// `GET /me` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub email: String,
}

/// `GET /health` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}
