use anyhow::Result;
use clap::{Parser, Subcommand};
use jobeco_application::AppContext;
use jobeco_infrastructure::JobecoPaths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "jobeco")]
#[command(about = "Job Eco System - browse job listings from the terminal", long_about = None)]
struct Cli {
    /// Backend URL (overrides config.toml and JOBECO_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory holding config.toml and session.toml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log flow details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login(commands::auth::CredentialArgs),
    /// Create an account
    Register(commands::auth::CredentialArgs),
    /// Forget the stored session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// List jobs, optionally filtered
    Jobs(commands::jobs::FilterArgs),
    /// Show one job in detail
    Show {
        /// Job id as printed by `jobeco jobs`
        id: String,
    },
    /// Check that the backend is up
    Health,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = JobecoPaths::new(cli.config_dir.as_deref());
    let app = AppContext::bootstrap(&paths, cli.base_url.as_deref())?;

    match cli.command {
        Commands::Login(args) => commands::auth::login(&app, args).await?,
        Commands::Register(args) => commands::auth::register(&app, args).await?,
        Commands::Logout => commands::auth::logout(&app).await,
        Commands::Whoami => commands::auth::whoami(&app).await?,
        Commands::Jobs(args) => commands::jobs::list(&app, args).await?,
        Commands::Show { id } => commands::jobs::show(&app, &id).await?,
        Commands::Health => commands::health::check(&app).await?,
    }

    Ok(())
}
