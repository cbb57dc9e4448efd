//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use movecar_core::types::{GeoPoint, NotificationRecord, NotifyId};

/// Create notification request body.
///
/// Both fields are optional: a notification can carry just a message,
/// just a location, both, or neither.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    /// Free-form message for the car owner.
    #[serde(default)]
    #[validate(length(max = 2000, message = "Message must not exceed 2000 characters"))]
    pub message: String,
    /// Location of the blocked car, WGS-84.
    #[serde(default)]
    #[validate(nested)]
    pub location: Option<GeoPointDto>,
}

impl CreateNotificationRequest {
    /// Converts the validated request into the stored payload.
    pub fn into_record(self) -> NotificationRecord {
        NotificationRecord::new(self.message, self.location.map(GeoPointDto::into_point))
    }
}

/// Geographic coordinate in a request body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct GeoPointDto {
    /// Latitude in degrees.
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,
    /// Longitude in degrees.
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub lng: f64,
}

impl GeoPointDto {
    fn into_point(self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Query parameters for the confirmation link embedded in push messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiveParams {
    /// Notification to confirm.
    pub id: NotifyId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let req = CreateNotificationRequest {
            message: "请挪车".to_string(),
            location: Some(GeoPointDto { lat: 31.23, lng: 121.47 }),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_request_passes_validation() {
        let req = CreateNotificationRequest {
            message: String::new(),
            location: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_fails_validation() {
        let req = CreateNotificationRequest {
            message: String::new(),
            location: Some(GeoPointDto { lat: 91.0, lng: 0.0 }),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_out_of_range_longitude_fails_validation() {
        let req = CreateNotificationRequest {
            message: String::new(),
            location: Some(GeoPointDto { lat: 0.0, lng: -181.0 }),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let req: CreateNotificationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_empty());
        assert!(req.location.is_none());
    }

    #[test]
    fn test_into_record_preserves_fields() {
        let req = CreateNotificationRequest {
            message: "hello".to_string(),
            location: Some(GeoPointDto { lat: 1.0, lng: 2.0 }),
        };
        let record = req.into_record();
        assert_eq!(record.message, "hello");
        assert_eq!(record.location.map(|p| (p.lat, p.lng)), Some((1.0, 2.0)));
    }
}
