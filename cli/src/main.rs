//! jobdeck - terminal client for the job-board API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (password prompted)
//! jobdeck login alice@example.com
//!
//! # Browse listings
//! jobdeck list --search frontend
//!
//! # Manage postings (admin)
//! jobdeck add --title "Engineer" --company "Acme" --description "..."
//! jobdeck delete 42 --yes
//! ```

use std::time::Duration;

use clap::Parser;

use jobdeck_cli::{CLIConfiguration, OutputFormat, OutputFormatter, Result};
use jobdeck_link::{AuthProvider, FileStorage, JobBoard, JobDeckClient, SessionStore};

mod args;
mod commands;

use args::{Cli, Command};

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CLIConfiguration::load(&cli.config)?;

    let storage = FileStorage::new();
    let mut session_store = SessionStore::new(storage.clone());
    let session = session_store.restore();

    // Flags take precedence over the config file
    let server_url = cli
        .url
        .clone()
        .or_else(|| config.server_url().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let timeout = cli.timeout.or_else(|| config.timeout()).unwrap_or(30);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::from_name(config.format())
    };
    let formatter = OutputFormatter::new(format, !cli.no_color && config.color());

    let auth = session
        .as_ref()
        .map(|s| s.auth_provider())
        .unwrap_or_else(AuthProvider::none);
    let client = JobDeckClient::builder()
        .base_url(&server_url)
        .timeout(Duration::from_secs(timeout))
        .auth(auth)
        .build()?;

    match cli.command {
        Command::Login { email, password } => {
            commands::auth::login(&client, &mut session_store, &email, password).await
        }
        Command::Register { email, password } => {
            commands::auth::register(&client, &mut session_store, &email, password).await
        }
        Command::Logout => commands::auth::logout(&mut session_store),
        Command::Whoami => commands::auth::whoami(session.as_ref()),
        Command::List { search } => {
            let board = JobBoard::new(client, storage, session);
            commands::jobs::list(board, search.as_deref(), &formatter).await
        }
        Command::Show { id } => {
            let board = JobBoard::new(client, storage, session);
            commands::jobs::show(board, &id, &formatter).await
        }
        Command::Add {
            title,
            company,
            description,
        } => {
            let board = JobBoard::new(client, storage, session.clone());
            commands::jobs::add(board, session.as_ref(), title, company, description).await
        }
        Command::Edit {
            id,
            title,
            company,
            description,
        } => {
            let board = JobBoard::new(client, storage, session.clone());
            commands::jobs::edit(board, session.as_ref(), &id, title, company, description).await
        }
        Command::Delete { id, yes } => {
            let board = JobBoard::new(client, storage, session.clone());
            commands::jobs::delete(board, session.as_ref(), &id, yes).await
        }
    }
}
