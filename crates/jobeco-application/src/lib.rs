//! Application layer for the Job Eco System client.
//!
//! Use cases that coordinate the domain state machines with the backend API:
//! logging in or registering, and browsing the job list.

pub mod bootstrap;
pub mod dashboard;
pub mod login_flow;

pub use bootstrap::AppContext;
pub use dashboard::{Dashboard, RefreshOutcome};
pub use login_flow::{LoginFlow, SubmitOutcome};
