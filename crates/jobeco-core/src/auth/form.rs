//! Login/registration form state machine.
//!
//! ```text
//! Anonymous --begin_submit--> Submitting --logged_in--> Authenticated
//!     ^                           |
//!     +---- registered / failed --+
//! Authenticated --logout--> Anonymous
//! ```
//!
//! The form only tracks state; the network round-trip is driven by the
//! application layer.

use super::credentials::Credentials;
use crate::error::{JobecoError, Result};
use crate::session::UserIdentity;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const REGISTERED_MESSAGE: &str = "Account created. You can log in now.";
pub const MISSING_FIELDS_MESSAGE: &str = "Email and password are required.";

/// Which endpoint the form submits to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn path(self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Anonymous,
    Submitting,
    Authenticated(UserIdentity),
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    mode: AuthMode,
    email: String,
    password: String,
    error: Option<String>,
    success: Option<String>,
    state: FlowState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches between login and register. State shape is unchanged.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FlowState::Submitting)
    }

    /// Clears messages and enters `Submitting`.
    ///
    /// Returns the credentials to post. Fails without changing state when a
    /// submit is already in flight or the user is already authenticated;
    /// empty fields set an inline error instead.
    pub fn begin_submit(&mut self) -> Result<Credentials> {
        match self.state {
            FlowState::Submitting => {
                return Err(JobecoError::internal("A submit is already in flight"));
            }
            FlowState::Authenticated(_) => {
                return Err(JobecoError::internal("Already authenticated"));
            }
            FlowState::Anonymous => {}
        }

        self.error = None;
        self.success = None;

        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return Err(JobecoError::validation(MISSING_FIELDS_MESSAGE));
        }

        self.state = FlowState::Submitting;
        Ok(Credentials::new(self.email.trim(), self.password.clone()))
    }

    /// Registration succeeded: back to login mode with a success message.
    pub fn registered(&mut self) {
        self.state = FlowState::Anonymous;
        self.success = Some(REGISTERED_MESSAGE.to_string());
        self.error = None;
        self.mode = AuthMode::Login;
        self.password.clear();
    }

    /// Login succeeded.
    pub fn logged_in(&mut self, user: UserIdentity) {
        self.state = FlowState::Authenticated(user);
        self.error = None;
        self.password.clear();
    }

    /// The submit failed; show `message` inline.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.state = FlowState::Anonymous;
        self.error = Some(message.into());
    }

    pub fn logout(&mut self) {
        self.state = FlowState::Anonymous;
        self.error = None;
        self.success = None;
        self.password.clear();
    }
}
