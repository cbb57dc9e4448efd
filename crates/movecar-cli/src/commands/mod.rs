//! CLI command definitions and dispatch.

pub mod confirm;
pub mod notify;
pub mod show;
pub mod watch;

use clap::{Parser, Subcommand};

use movecar_client::NotifyClient;
use movecar_core::error::AppError;

use crate::output::OutputFormat;

/// Movecar — blocked-car notification service
#[derive(Debug, Parser)]
#[command(name = "movecar-cli", version, about, long_about = None)]
pub struct Cli {
    /// Address of the Movecar API server
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    pub server: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Notify a car owner that their car is blocking someone
    Notify(notify::NotifyArgs),
    /// Show the stored payload of a notification
    Show(show::ShowArgs),
    /// Confirm a notification on behalf of the car owner
    Confirm(confirm::ConfirmArgs),
    /// Wait until a notification is confirmed
    Watch(watch::WatchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let client = NotifyClient::new(self.server.as_str())?;

        match &self.command {
            Commands::Notify(args) => notify::execute(args, &client, self.format).await,
            Commands::Show(args) => show::execute(args, &client, self.format).await,
            Commands::Confirm(args) => confirm::execute(args, &client, self.format).await,
            Commands::Watch(args) => watch::execute(args, &client, self.format).await,
        }
    }
}
