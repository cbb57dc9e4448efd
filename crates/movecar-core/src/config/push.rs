//! Push gateway configuration.

use serde::{Deserialize, Serialize};

/// Push gateway configuration.
///
/// The credential has no default. A missing credential is rejected when
/// the gateway is constructed, before the server accepts any request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// ServerChan send key. Usually supplied via the
    /// `MOVECAR__PUSH__CREDENTIAL` environment variable.
    #[serde(default)]
    pub credential: Option<String>,
    /// Base URL of the push endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            credential: None,
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://14776.push.ft07.com/send".to_string()
}

fn default_timeout() -> u64 {
    10
}
