use crate::render;
use anyhow::{Result, bail};
use clap::Args;
use jobeco_application::{AppContext, Dashboard, RefreshOutcome};
use jobeco_core::job::JobId;
use jobeco_core::listing::{FilterField, JobFilter};
use tokio_util::sync::CancellationToken;

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the job title
    #[arg(long)]
    pub title: Option<String>,

    /// Case-insensitive substring of the location
    #[arg(long)]
    pub location: Option<String>,

    /// Case-insensitive substring of the company
    #[arg(long)]
    pub company: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> JobFilter {
        [
            (FilterField::Title, &self.title),
            (FilterField::Location, &self.location),
            (FilterField::Company, &self.company),
        ]
        .into_iter()
        .fold(JobFilter::new(), |filter, (field, value)| match value {
            Some(value) => filter.with(field, value.as_str()),
            None => filter,
        })
    }
}

pub async fn list(app: &AppContext, args: FilterArgs) -> Result<()> {
    let mut dashboard = app.dashboard();
    if !load(&mut dashboard).await? {
        return Ok(());
    }

    dashboard.set_filters(args.to_filter());
    print!("{}", render::job_table(&dashboard.visible()));
    Ok(())
}

pub async fn show(app: &AppContext, id: &str) -> Result<()> {
    let mut dashboard = app.dashboard();
    if !load(&mut dashboard).await? {
        return Ok(());
    }

    let detail = dashboard.select(&JobId::new(id))?;
    print!("{}", render::job_detail(&detail));
    Ok(())
}

/// Fetches jobs; Ctrl-C cancels the request. Returns false when there is
/// nothing to show.
async fn load(dashboard: &mut Dashboard) -> Result<bool> {
    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let outcome = dashboard.refresh(&cancel).await;
    watcher.abort();

    match outcome? {
        RefreshOutcome::Loaded(count) => {
            tracing::debug!(count, "Jobs loaded");
            Ok(true)
        }
        RefreshOutcome::Anonymous => bail!("Not logged in. Run `jobeco login` first."),
        RefreshOutcome::SessionExpired => {
            bail!("Session expired. Run `jobeco login` again.")
        }
        RefreshOutcome::Cancelled => {
            eprintln!("Cancelled");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_filter() {
        let args = FilterArgs {
            title: Some("engineer".to_string()),
            company: Some("Acme".to_string()),
            ..Default::default()
        };

        let filter = args.to_filter();
        assert_eq!(filter.get(FilterField::Title), "engineer");
        assert_eq!(filter.get(FilterField::Company), "Acme");
        assert_eq!(filter.get(FilterField::Location), "");
        assert!(FilterArgs::default().to_filter().is_empty());
    }
}
