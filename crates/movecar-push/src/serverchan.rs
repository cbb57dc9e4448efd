//! ServerChan push gateway client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use movecar_core::config::push::PushConfig;
use movecar_core::error::{AppError, ErrorKind};
use movecar_core::result::AppResult;
use movecar_core::traits::push::PushGateway;
use movecar_core::types::push::PushMessage;

/// Request body in ServerChan's wire format.
#[derive(Debug, Serialize)]
struct ServerChanPayload<'a> {
    title: &'a str,
    desp: &'a str,
}

/// Push gateway backed by ServerChan.
///
/// Sends `POST {endpoint}/{credential}.send` with a JSON body. Any 2xx
/// response counts as delivered.
#[derive(Debug, Clone)]
pub struct ServerChanGateway {
    client: reqwest::Client,
    endpoint: String,
    credential: String,
}

impl ServerChanGateway {
    /// Create a gateway from configuration.
    ///
    /// Fails with a configuration error when no credential is set. This
    /// runs at startup, so a misconfigured deployment refuses to start
    /// instead of failing on the first notification.
    pub fn new(config: &PushConfig) -> AppResult<Self> {
        let credential = match config.credential.as_deref() {
            Some(credential) if !credential.is_empty() => credential.to_string(),
            _ => {
                return Err(AppError::configuration(
                    "Push credential is not set. Configure push.credential or the \
                     MOVECAR__PUSH__CREDENTIAL environment variable",
                ));
            }
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            credential,
        })
    }

    /// Full send URL. Contains the credential, so it must never be logged.
    fn send_url(&self) -> String {
        format!("{}/{}.send", self.endpoint, self.credential)
    }
}

#[async_trait]
impl PushGateway for ServerChanGateway {
    async fn send(&self, message: &PushMessage) -> AppResult<()> {
        let payload = ServerChanPayload {
            title: &message.title,
            desp: &message.body,
        };

        let response = self
            .client
            .post(self.send_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Delivery, format!("Push request failed: {e}"), e)
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(endpoint = %self.endpoint, "Push accepted by gateway");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::delivery(format!(
                "Push gateway returned {status}: {body}"
            )))
        }
    }
}
