use anyhow::Result;
use colored::Colorize;
use jobeco_application::AppContext;

pub async fn check(app: &AppContext) -> Result<()> {
    let health = app.api().health().await?;
    let database = health.database.as_deref().unwrap_or("unknown");
    println!(
        "{} {} (database: {})",
        app.config().base_url.bright_black(),
        health.status.green(),
        database
    );
    Ok(())
}
