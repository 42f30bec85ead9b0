//! Dashboard use case: the job list of an authenticated user.

use jobeco_core::error::{JobecoError, Result};
use jobeco_core::job::{Job, JobId, ingest_listings};
use jobeco_core::listing::{FilterField, JobDetail, JobFilter, ListingViewModel};
use jobeco_core::session::UserIdentity;
use jobeco_interaction::{Authorized, JobBoardApi};
use tokio_util::sync::CancellationToken;

/// How a `refresh` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No session; nothing was fetched
    Anonymous,
    /// Jobs replaced with this many entries
    Loaded(usize),
    /// The backend rejected the token; the session is gone and the list cleared
    SessionExpired,
    /// The cancellation token fired; the list is untouched
    Cancelled,
}

pub struct Dashboard {
    api: JobBoardApi,
    listing: ListingViewModel,
}

impl Dashboard {
    pub fn new(api: JobBoardApi) -> Self {
        Self {
            api,
            listing: ListingViewModel::new(),
        }
    }

    pub fn listing(&self) -> &ListingViewModel {
        &self.listing
    }

    pub async fn user(&self) -> Option<UserIdentity> {
        self.api.session().current().await.map(|s| s.user)
    }

    /// Fetches `/jobs` and replaces the list.
    ///
    /// The loading flag is set for the duration of the call and always
    /// cleared afterwards. Non-2xx and transport failures are returned as
    /// errors and leave the current list in place.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> Result<RefreshOutcome> {
        if !self.api.session().is_authenticated().await {
            self.listing.set_loading(false);
            return Ok(RefreshOutcome::Anonymous);
        }

        self.listing.set_loading(true);
        let result = self.api.fetch_jobs(cancel).await;
        self.listing.set_loading(false);

        match result {
            Ok(Authorized::Ok(listings)) => {
                let jobs = ingest_listings(listings);
                let count = jobs.len();
                self.listing.set_jobs(jobs);
                Ok(RefreshOutcome::Loaded(count))
            }
            Ok(Authorized::SessionInvalid) => {
                self.listing.reset();
                Ok(RefreshOutcome::SessionExpired)
            }
            Err(JobecoError::Cancelled) => {
                tracing::debug!("Job fetch cancelled; keeping current list");
                Ok(RefreshOutcome::Cancelled)
            }
            Err(err) => {
                tracing::warn!("Fetch skipped: {}", err);
                Err(err)
            }
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.listing.set_filter(field, value);
    }

    pub fn set_filters(&mut self, filter: JobFilter) {
        self.listing.set_filters(filter);
    }

    pub fn visible(&self) -> Vec<&Job> {
        self.listing.visible()
    }

    /// Opens the detail view for `id`.
    pub fn select(&mut self, id: &JobId) -> Result<JobDetail<'_>> {
        if !self.listing.select(id) {
            return Err(JobecoError::not_found("job", id.as_str()));
        }
        self.listing
            .detail()
            .ok_or_else(|| JobecoError::internal("Selected job vanished"))
    }

    pub fn close_detail(&mut self) {
        self.listing.clear_selection();
    }

    /// Asks the backend who the token belongs to.
    ///
    /// `Ok(None)` when there is no session or the backend rejected it.
    pub async fn whoami(&self) -> Result<Option<UserIdentity>> {
        if !self.api.session().is_authenticated().await {
            return Ok(None);
        }
        match self.api.me().await? {
            Authorized::Ok(me) => Ok(Some(UserIdentity::new(me.email))),
            Authorized::SessionInvalid => Ok(None),
        }
    }

    /// Clears the session, the job list and the selection.
    pub async fn logout(&mut self) {
        self.api.session().invalidate().await;
        self.listing.reset();
        tracing::info!("Logged out");
    }
}
