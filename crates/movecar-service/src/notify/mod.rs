//! Notification lifecycle service and its create outcome.

pub mod outcome;
pub mod service;

pub use outcome::CreateOutcome;
pub use service::NotifyService;
