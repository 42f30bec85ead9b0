//! Filter criteria for the job list.

use crate::job::Job;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Job field a filter applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Title,
    Location,
    Company,
}

impl FilterField {
    /// The value of this field on `job`.
    pub fn value_of(self, job: &Job) -> &str {
        match self {
            FilterField::Title => &job.title,
            FilterField::Location => &job.location,
            FilterField::Company => &job.company,
        }
    }
}

/// Three independent criteria, combined with AND.
///
/// An empty string imposes no constraint. A non-empty one matches when the
/// job field contains it, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    pub title: String,
    pub location: String,
    pub company: String,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Title => &self.title,
            FilterField::Location => &self.location,
            FilterField::Company => &self.company,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Title => &mut self.title,
            FilterField::Location => &mut self.location,
            FilterField::Company => &mut self.company,
        };
        *slot = value.into();
    }

    /// Builder-style variant of `set`.
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.location.is_empty() && self.company.is_empty()
    }

    pub fn matches(&self, job: &Job) -> bool {
        contains_ignore_case(&job.title, &self.title)
            && contains_ignore_case(&job.location, &self.location)
            && contains_ignore_case(&job.company, &self.company)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
