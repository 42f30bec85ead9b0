//! Job domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a job posting.
///
/// Either the id the backend sent, or a content-derived UUID v5 when it
/// sent none. Never a list position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A job posting as shown in the dashboard. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
}

/// Server-provided id; the backend may send it as text or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Text(s) => f.write_str(s),
            ListingId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A job posting exactly as the `/jobs` endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub id: Option<ListingId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
}

impl JobListing {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            company: company.into(),
            location: location.into(),
        }
    }
}
