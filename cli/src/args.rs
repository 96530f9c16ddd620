use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jobdeck - terminal client for the job board
#[derive(Parser, Debug)]
#[command(name = "jobdeck")]
#[command(version)]
#[command(about = "Browse and manage job postings from the terminal", long_about = None)]
pub struct Cli {
    /// Server URL (e.g., http://localhost:8080)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Configuration file path
    #[arg(long = "config", global = true, default_value = "~/.config/jobdeck/config.toml")]
    pub config: PathBuf,

    /// Enable JSON output
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session
    Login {
        /// Account email
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(long = "password")]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Account email
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(long = "password")]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// List job postings
    List {
        /// Filter by a case-insensitive search term
        #[arg(short = 's', long = "search")]
        search: Option<String>,
    },

    /// Show a single job posting
    Show {
        /// Job id
        id: String,
    },

    /// Create a job posting (admin only)
    Add {
        #[arg(long = "title")]
        title: String,

        #[arg(long = "company")]
        company: String,

        #[arg(long = "description")]
        description: String,
    },

    /// Edit a job posting (admin only)
    Edit {
        /// Job id
        id: String,

        /// New title (unchanged when omitted)
        #[arg(long = "title")]
        title: Option<String>,

        /// New company (unchanged when omitted)
        #[arg(long = "company")]
        company: Option<String>,

        /// New description (unchanged when omitted)
        #[arg(long = "description")]
        description: Option<String>,
    },

    /// Delete a job posting (admin only)
    Delete {
        /// Job id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}
