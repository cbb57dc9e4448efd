//! Watch command: wait for the car owner's confirmation.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use movecar_client::{NotifyClient, PollOutcome, StatusPoller};
use movecar_core::error::AppError;
use movecar_core::types::NotifyId;

use crate::output::{self, OutputFormat};

/// Arguments for the watch command
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Notification id
    pub id: NotifyId,

    /// Seconds between status polls
    #[arg(long, default_value_t = 2)]
    pub interval: u64,
}

/// Execute the watch command
pub async fn execute(
    args: &WatchArgs,
    client: &NotifyClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let poller = StatusPoller::new(Arc::new(client.clone()))
        .with_interval(Duration::from_secs(args.interval));
    let cancel = CancellationToken::new();

    // Ctrl-C stops the wait without marking anything.
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    if format == OutputFormat::Text {
        println!("Waiting for confirmation of {} (Ctrl-C to stop)", args.id);
    }

    let outcome = poller.wait_until_confirmed(args.id, cancel).await;

    match format {
        OutputFormat::Json => {
            let outcome = match outcome {
                PollOutcome::Confirmed => "confirmed",
                PollOutcome::Cancelled => "cancelled",
            };
            output::print_json(&json!({ "outcome": outcome }));
        }
        OutputFormat::Text => match outcome {
            PollOutcome::Confirmed => output::print_success("The car owner confirmed"),
            PollOutcome::Cancelled => {
                println!("Stopped waiting; the notification is still active")
            }
        },
    }

    Ok(())
}
