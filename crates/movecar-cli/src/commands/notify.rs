//! Notify command: report a blocking car.

use clap::Args;

use movecar_client::NotifyClient;
use movecar_core::error::AppError;
use movecar_core::types::GeoPoint;

use crate::output::{self, OutputFormat};

/// Arguments for the notify command
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Message for the car owner
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Latitude of the blocked car
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude of the blocked car
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,
}

/// Execute the notify command
pub async fn execute(
    args: &NotifyArgs,
    client: &NotifyClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let location = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    };

    let created = client.create(args.message.clone(), location).await?;

    match format {
        OutputFormat::Json => output::print_json(&created),
        OutputFormat::Text => {
            println!("Notification created: {}", created.id);
            if created.delivered {
                output::print_success("Push delivered to the car owner");
            } else {
                let reason = created.warning.as_deref().unwrap_or("unknown reason");
                output::print_warning(&format!("Stored, but push delivery failed: {reason}"));
            }
            println!(
                "Run `movecar-cli watch {}` to wait for confirmation",
                created.id
            );
        }
    }

    Ok(())
}
