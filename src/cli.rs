//! Command line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cohortdesk", version, about = "Admin client for the cohort program API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in profile
    Me,
    /// Onboarding progress
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },
    /// Client directory
    Clients {
        #[command(subcommand)]
        command: ClientsCommand,
    },
    /// Cohort management
    Cohorts {
        #[command(subcommand)]
        command: CohortsCommand,
    },
    /// Onboarding documents
    Documents {
        #[command(subcommand)]
        command: DocumentsCommand,
    },
    /// Notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Fetch the milestone record and show the step cards
    Show,
    /// Jump to a step, synthesizing prerequisites where the rules allow
    Goto { step: u8 },
    /// Mark a milestone as reached and resync
    Complete { step: u8 },
}

#[derive(Subcommand, Debug)]
pub enum ClientsCommand {
    /// List clients, paginated
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one client
    Get { id: String },
    /// Create a client
    Add(ClientFields),
    /// Update fields on a client
    Update {
        id: String,
        #[command(flatten)]
        fields: ClientUpdateFields,
    },
    /// Delete a client
    Remove { id: String },
    /// Import clients from a spreadsheet
    Import { file: PathBuf },
}

#[derive(Args, Debug)]
pub struct ClientFields {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub cohort: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClientUpdateFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub cohort: Option<String>,
    #[arg(long)]
    pub status: Option<StatusArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StatusArg {
    Pending,
    Active,
    Archived,
}

#[derive(Subcommand, Debug)]
pub enum CohortsCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        starts_on: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        starts_on: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
    },
    Remove {
        id: String,
    },
    /// Move clients into a cohort
    Assign {
        id: String,
        #[arg(long = "client", required = true)]
        clients: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocumentsCommand {
    /// Upload an onboarding document
    Upload {
        file: PathBuf,
        #[arg(long)]
        kind: DocumentKindArg,
    },
    List,
    /// Fetch a document's bytes
    Preview {
        id: String,
        /// Write to this file instead of describing the payload
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DocumentKindArg {
    Identity,
    Participation,
    Consulting,
    Authority,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    List,
    /// Mark a notification as read
    Read { id: String },
    /// Publish a broadcast
    Broadcast {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "info")]
        kind: NotificationKindArg,
        /// Address one cohort instead of everyone
        #[arg(long, conflicts_with = "client")]
        cohort: Option<String>,
        /// Address one client instead of everyone
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        action_link: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum NotificationKindArg {
    Info,
    Reminder,
    Warning,
}
