//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair marking where the blocked car is parked.
///
/// Stored and served exactly as submitted. Converting to other datums or
/// rendering map links is the caller's business, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}
