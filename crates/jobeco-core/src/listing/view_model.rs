//! Listing view model: fetched jobs, filters, selection.

use super::filter::{FilterField, JobFilter};
use crate::job::{Job, JobId};

/// Description shown in the detail view until the backend serves real ones.
pub const PLACEHOLDER_DESCRIPTION: &str =
    "This is a preview job description. Later we will fetch real job data automatically.";

/// What the detail view shows for the selected job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail<'a> {
    pub job: &'a Job,
    pub description: &'static str,
}

/// In-memory derived state for the dashboard.
///
/// `visible()` is recomputed from the latest jobs and filters on every call,
/// so the result never depends on the order updates arrived in.
#[derive(Debug, Clone, Default)]
pub struct ListingViewModel {
    jobs: Vec<Job>,
    filter: JobFilter,
    selected: Option<JobId>,
    loading: bool,
}

impl ListingViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole job collection.
    ///
    /// A selection that no longer exists in the new collection is cleared.
    pub fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        if let Some(id) = &self.selected {
            if !self.jobs.iter().any(|j| &j.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filter.set(field, value);
    }

    pub fn filter(&self, field: FilterField) -> &str {
        self.filter.get(field)
    }

    pub fn filters(&self) -> &JobFilter {
        &self.filter
    }

    /// Replaces all three criteria at once.
    pub fn set_filters(&mut self, filter: JobFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter = JobFilter::default();
    }

    /// Jobs satisfying all three criteria, in fetch order.
    pub fn visible(&self) -> Vec<&Job> {
        self.jobs.iter().filter(|j| self.filter.matches(j)).collect()
    }

    pub fn find(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    /// Sets the detail target. Returns `false` (and leaves the selection
    /// unchanged) if no job has this id.
    pub fn select(&mut self, id: &JobId) -> bool {
        if self.find(id).is_some() {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Job> {
        self.selected.as_ref().and_then(|id| self.find(id))
    }

    pub fn detail(&self) -> Option<JobDetail<'_>> {
        self.selected().map(|job| JobDetail {
            job,
            description: PLACEHOLDER_DESCRIPTION,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Drops jobs and selection; filters are kept.
    pub fn reset(&mut self) {
        self.jobs.clear();
        self.selected = None;
        self.loading = false;
    }
}
