//! Plain-text rendering of jobs.

use colored::Colorize;
use jobeco_core::job::Job;
use jobeco_core::listing::JobDetail;
use std::fmt::Write;

const NO_JOBS: &str = "No jobs match the current filters.";

/// One line per job: id, title, company, location.
pub fn job_table(jobs: &[&Job]) -> String {
    if jobs.is_empty() {
        return format!("{}\n", NO_JOBS.bright_black());
    }

    let title_width = jobs.iter().map(|j| j.title.chars().count()).max().unwrap_or(0);
    let company_width = jobs.iter().map(|j| j.company.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for job in jobs {
        let _ = writeln!(
            out,
            "{}  {:<tw$}  {:<cw$}  {}",
            job.id.as_str().bright_black(),
            job.title.bold(),
            job.company,
            job.location,
            tw = title_width,
            cw = company_width,
        );
    }
    out
}

pub fn job_detail(detail: &JobDetail<'_>) -> String {
    let job = detail.job;
    let mut out = String::new();
    let _ = writeln!(out, "{}", job.title.bold());
    let _ = writeln!(out, "{} · {}", job.company, job.location);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.description);
    out
}
