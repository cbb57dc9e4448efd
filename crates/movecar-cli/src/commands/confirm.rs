//! Confirm command: mark a notification as handled.

use clap::Args;

use movecar_client::NotifyClient;
use movecar_core::error::AppError;
use movecar_core::types::NotifyId;

use crate::output::{self, OutputFormat};

/// Arguments for the confirm command
#[derive(Debug, Args)]
pub struct ConfirmArgs {
    /// Notification id
    pub id: NotifyId,
}

/// Execute the confirm command
pub async fn execute(
    args: &ConfirmArgs,
    client: &NotifyClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let confirmed = client.confirm(args.id).await?;

    match format {
        OutputFormat::Json => output::print_json(&confirmed),
        OutputFormat::Text => output::print_success(&format!(
            "Notification {} marked as {}",
            args.id, confirmed.status
        )),
    }

    Ok(())
}
