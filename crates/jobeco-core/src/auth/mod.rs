//! Authentication domain module.
//!
//! - `credentials`: the `{email, password}` request body
//! - `form`: login/registration form state machine
//! - `error_message`: readable messages from backend error bodies

mod credentials;
mod error_message;
mod form;

pub use credentials::Credentials;
pub use error_message::{extract_error_message, fallback_message};
pub use form::{AuthMode, FlowState, LoginForm, MISSING_FIELDS_MESSAGE, REGISTERED_MESSAGE};
