//! Show command: display a stored notification.

use clap::Args;

use movecar_client::NotifyClient;
use movecar_core::error::AppError;
use movecar_core::types::NotifyId;

use crate::output::{self, OutputFormat};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Notification id
    pub id: NotifyId,
}

/// Execute the show command
pub async fn execute(
    args: &ShowArgs,
    client: &NotifyClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let record = client.fetch(args.id).await?;

    match format {
        OutputFormat::Json => output::print_json(&record),
        OutputFormat::Text => {
            let message = if record.message.is_empty() {
                "(none)"
            } else {
                &record.message
            };
            output::print_kv("Message", message);

            match record.location {
                Some(point) => {
                    output::print_kv("Location", &format!("{}, {}", point.lat, point.lng))
                }
                None => output::print_kv("Location", "(none)"),
            }
        }
    }

    Ok(())
}
