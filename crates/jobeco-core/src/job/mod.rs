//! Job domain module.
//!
//! - `model`: `Job`, `JobId`, and the wire-level `JobListing`
//! - `ingest`: assigns stable ids to fetched listings

mod ingest;
mod model;

pub use ingest::ingest_listings;
pub use model::{Job, JobId, JobListing, ListingId};
