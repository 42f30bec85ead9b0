//! Listing view model module.

mod filter;
mod view_model;

pub use filter::{FilterField, JobFilter};
pub use view_model::{JobDetail, ListingViewModel, PLACEHOLDER_DESCRIPTION};
