//! The stored notification payload.

use serde::{Deserialize, Serialize};

use crate::types::geo::GeoPoint;

/// What a requester submitted for the blocking driver.
///
/// Records are immutable once written. The lifecycle never updates one
/// in place; it only expires.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Free-text note for the driver. May be empty.
    #[serde(default)]
    pub message: String,
    /// Where the blocked car is parked, if the requester shared it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl NotificationRecord {
    /// Create a record from a message and optional location.
    pub fn new(message: impl Into<String>, location: Option<GeoPoint>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_with_location() {
        let record = NotificationRecord::new(
            "请挪车",
            Some(GeoPoint {
                lat: 31.23,
                lng: 121.47,
            }),
        );
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: NotificationRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_location_omitted_when_absent() {
        let record = NotificationRecord::new("hello", None);
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, "{\"message\":\"hello\"}");
    }

    #[test]
    fn test_missing_fields_default() {
        let parsed: NotificationRecord = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(parsed.message, "");
        assert!(parsed.location.is_none());
    }
}
