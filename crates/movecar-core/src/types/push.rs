//! The message handed to the push gateway.

use serde::{Deserialize, Serialize};

/// A human-readable alert for the blocking driver's push channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Short headline shown by the push channel.
    pub title: String,
    /// Full alert text. Channels that render markdown will make the
    /// embedded confirm link clickable.
    pub body: String,
}

impl PushMessage {
    /// Create a push message.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
