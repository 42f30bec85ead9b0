//! Turns fetched listings into jobs with stable identifiers.

use super::model::{Job, JobId, JobListing};
use std::collections::HashMap;
use uuid::Uuid;

/// Assigns a stable `JobId` to every listing.
///
/// The server-provided id wins when present. Otherwise the id is a UUID v5
/// over the listing content, so the same posting keeps its id across fetches
/// and reorderings. Exact duplicates are told apart by occurrence number
/// (first copy `#0`, second `#1`, ...), counted in fetch order.
pub fn ingest_listings(listings: Vec<JobListing>) -> Vec<Job> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    listings
        .into_iter()
        .map(|listing| {
            let id = match &listing.id {
                Some(server_id) => JobId::new(server_id.to_string()),
                None => {
                    let content = content_key(&listing);
                    let occurrence = seen.entry(content.clone()).or_insert(0);
                    let keyed = format!("{}#{}", content, occurrence);
                    *occurrence += 1;
                    JobId::new(Uuid::new_v5(&Uuid::NAMESPACE_OID, keyed.as_bytes()).to_string())
                }
            };

            Job {
                id,
                title: listing.title,
                company: listing.company,
                location: listing.location,
            }
        })
        .collect()
}

// Unit separator keeps "a|b" + "c" distinct from "a" + "b|c".
fn content_key(listing: &JobListing) -> String {
    format!(
        "{}\u{1f}{}\u{1f}{}",
        listing.title, listing.company, listing.location
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::model::ListingId;

    #[test]
    fn test_server_id_is_kept() {
        let mut listing = JobListing::new("Backend Engineer", "Acme", "Remote");
        listing.id = Some(ListingId::Number(7));

        let jobs = ingest_listings(vec![listing]);
        assert_eq!(jobs[0].id.as_str(), "7");
    }

    #[test]
    fn test_content_id_stable_across_order() {
        let a = JobListing::new("Backend Engineer", "Acme", "Remote");
        let b = JobListing::new("Data Analyst", "Acme", "NYC");

        let first = ingest_listings(vec![a.clone(), b.clone()]);
        let second = ingest_listings(vec![b, a]);

        assert_eq!(first[0].id, second[1].id);
        assert_eq!(first[1].id, second[0].id);
        assert_ne!(first[0].id, first[1].id);
    }

    #[test]
    fn test_duplicates_get_distinct_ids() {
        let listing = JobListing::new("Backend Engineer", "Acme", "Remote");
        let jobs = ingest_listings(vec![listing.clone(), listing]);
        assert_ne!(jobs[0].id, jobs[1].id);
    }
}
