use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use jobeco_application::{AppContext, SubmitOutcome};
use jobeco_core::auth::AuthMode;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password (prompted on stdin when omitted)
    #[arg(long, env = "JOBECO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub async fn login(app: &AppContext, args: CredentialArgs) -> Result<()> {
    submit(app, AuthMode::Login, args).await
}

pub async fn register(app: &AppContext, args: CredentialArgs) -> Result<()> {
    submit(app, AuthMode::Register, args).await
}

async fn submit(app: &AppContext, mode: AuthMode, args: CredentialArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let mut flow = app.login_flow();
    flow.fill(mode, args.email, password);

    match flow.submit().await {
        SubmitOutcome::LoggedIn(user) => {
            println!("{}", format!("Logged in as {}", user.email).green());
        }
        SubmitOutcome::Registered => {
            let message = flow.form().success().unwrap_or_default();
            println!("{}", message.green());
        }
        SubmitOutcome::Failed(message) => bail!(message),
    }
    Ok(())
}

pub async fn logout(app: &AppContext) {
    app.dashboard().logout().await;
    println!("{}", "Logged out".bright_black());
}

pub async fn whoami(app: &AppContext) -> Result<()> {
    let dashboard = app.dashboard();
    match dashboard.whoami().await? {
        Some(user) => println!("{}", user.email),
        None => println!("{}", "Not logged in".yellow()),
    }
    Ok(())
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
