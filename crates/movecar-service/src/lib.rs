//! # movecar-service
//!
//! The notification lifecycle for Movecar. [`NotifyService`] owns the
//! four operations a notification goes through: create, read, confirm,
//! and status check. It is the only code that derives KV keys, and the
//! only code that decides which failures a caller gets to see.
//!
//! Dependencies arrive by constructor injection as `Arc` trait objects,
//! so the service never knows which store or gateway it is talking to.

pub mod keys;
pub mod notify;

pub use notify::outcome::CreateOutcome;
pub use notify::service::NotifyService;
