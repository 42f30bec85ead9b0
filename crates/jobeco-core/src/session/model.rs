//! Session domain model.
//!
//! A session is the client-held proof of authentication: the bearer token
//! issued by `/login` plus the identity of the user it was issued for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the logged-in user.
///
/// Persisted as JSON text under the `user` key. Only `email` is required;
/// records written by older clients without `logged_in_at` still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            logged_in_at: None,
        }
    }

    /// Stamps the identity with the current time.
    pub fn logged_in_now(mut self) -> Self {
        self.logged_in_at = Some(Utc::now());
        self
    }
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token sent as `Authorization: Bearer <token>`
    pub token: String,
    pub user: UserIdentity,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserIdentity) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Manual impl so tokens never end up in logs via `{:?}`.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let session = Session::new("T", UserIdentity::new("a@b.com"));
        assert_eq!(session.bearer(), "Bearer T");
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("secret-token", UserIdentity::new("a@b.com"));
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("a@b.com"));
    }

    #[test]
    fn test_user_record_without_timestamp_parses() {
        let user: UserIdentity = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.logged_in_at.is_none());
    }
}
