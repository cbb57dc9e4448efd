//! Notification lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Notification lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Public base URL of this deployment, used to build the confirm
    /// link embedded in push messages.
    #[serde(default = "default_public_url")]
    pub public_url: String,
    /// How long a stored payload stays readable, in seconds.
    #[serde(default = "default_payload_ttl")]
    pub payload_ttl_seconds: u64,
    /// How long a status record lives, in seconds. Deliberately shorter
    /// than the payload TTL: status only matters while someone polls,
    /// and a confirm rewrites it with a fresh window.
    #[serde(default = "default_status_ttl")]
    pub status_ttl_seconds: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
            payload_ttl_seconds: default_payload_ttl(),
            status_ttl_seconds: default_status_ttl(),
        }
    }
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_payload_ttl() -> u64 {
    3600
}

fn default_status_ttl() -> u64 {
    600
}
