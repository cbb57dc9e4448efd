//! Confirmation status of a notification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where a notification stands from the requester's point of view.
///
/// The status only ever moves from [`Waiting`](Self::Waiting) to
/// [`Confirmed`](Self::Confirmed). A missing status record reads as
/// `Waiting`, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyStatus {
    /// The requester is still waiting for the blocking driver.
    Waiting,
    /// The driver confirmed they are on the way.
    Confirmed,
}

impl NotifyStatus {
    /// Whether the driver has acknowledged the request.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Return the string representation stored in the KV store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for NotifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotifyStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(AppError::validation(format!(
                "Invalid notify status: '{s}'. Expected one of: waiting, confirmed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&NotifyStatus::Confirmed).expect("serialize");
        assert_eq!(json, "\"confirmed\"");
        let parsed: NotifyStatus = serde_json::from_str("\"waiting\"").expect("deserialize");
        assert_eq!(parsed, NotifyStatus::Waiting);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for status in [NotifyStatus::Waiting, NotifyStatus::Confirmed] {
            let parsed: NotifyStatus = status.as_str().parse().expect("should parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("done".parse::<NotifyStatus>().is_err());
    }

    #[test]
    fn test_is_confirmed() {
        assert!(NotifyStatus::Confirmed.is_confirmed());
        assert!(!NotifyStatus::Waiting.is_confirmed());
    }
}
