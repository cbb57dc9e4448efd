//! Core type definitions used across the Movecar workspace.

pub mod geo;
pub mod id;
pub mod push;
pub mod record;
pub mod status;

pub use geo::GeoPoint;
pub use id::NotifyId;
pub use push::PushMessage;
pub use record::NotificationRecord;
pub use status::NotifyStatus;
