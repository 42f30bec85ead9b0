//! Login/registration use case.

use jobeco_core::auth::{AuthMode, FlowState, LoginForm};
use jobeco_core::error::JobecoError;
use jobeco_core::session::{Session, UserIdentity};
use jobeco_interaction::JobBoardApi;

const NETWORK_ERROR: &str = "Network error";

/// What a `submit` ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session established; the dashboard can take over
    LoggedIn(UserIdentity),
    /// Account created; the form is back in login mode
    Registered,
    /// The form shows this message inline
    Failed(String),
}

/// Drives a `LoginForm` against the backend.
pub struct LoginFlow {
    api: JobBoardApi,
    form: LoginForm,
}

impl LoginFlow {
    pub fn new(api: JobBoardApi) -> Self {
        Self {
            api,
            form: LoginForm::new(),
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    /// Convenience for hosts that collect fields up front.
    pub fn fill(&mut self, mode: AuthMode, email: impl Into<String>, password: impl Into<String>) {
        self.form.set_mode(mode);
        self.form.set_email(email);
        self.form.set_password(password);
    }

    /// Submits the form to `/login` or `/register`, depending on its mode.
    ///
    /// On login success the session is established (and persisted) before
    /// the form moves to `Authenticated`. Failures never touch the session.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let credentials = match self.form.begin_submit() {
            Ok(credentials) => credentials,
            Err(err) => {
                let message = self
                    .form
                    .error()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                return SubmitOutcome::Failed(message);
            }
        };

        let mode = self.form.mode();
        tracing::debug!(%mode, email = %credentials.email, "Submitting credentials");

        match mode {
            AuthMode::Register => match self.api.register(&credentials).await {
                Ok(_) => {
                    self.form.registered();
                    SubmitOutcome::Registered
                }
                Err(err) => self.fail(err),
            },
            AuthMode::Login => {
                let response = match self.api.login(&credentials).await {
                    Ok(response) => response,
                    Err(err) => return self.fail(err),
                };

                let user = UserIdentity::new(credentials.email).logged_in_now();
                let session = Session::new(response.access_token, user.clone());
                if let Err(err) = self.api.session().establish(session).await {
                    return self.fail(err);
                }

                tracing::info!(email = %user.email, "Logged in");
                self.form.logged_in(user.clone());
                SubmitOutcome::LoggedIn(user)
            }
        }
    }

    /// Clears the session and returns the form to `Anonymous`.
    pub async fn logout(&mut self) {
        self.api.session().invalidate().await;
        self.form.logout();
    }

    pub fn state(&self) -> &FlowState {
        self.form.state()
    }

    fn fail(&mut self, err: JobecoError) -> SubmitOutcome {
        let message = user_message(&err);
        tracing::debug!("Submit failed: {}", err);
        self.form.failed(message.clone());
        SubmitOutcome::Failed(message)
    }
}

/// Inline message for a failed submit.
fn user_message(err: &JobecoError) -> String {
    match err {
        JobecoError::Http { message, .. } => message.clone(),
        JobecoError::Network(message) if message.trim().is_empty() => NETWORK_ERROR.to_string(),
        other => other.to_string(),
    }
}
