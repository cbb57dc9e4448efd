//! Client library for the Movecar API.
//!
//! [`NotifyClient`] speaks the REST API over HTTP; [`StatusPoller`]
//! drives the blocked driver's wait loop, polling any
//! [`StatusSource`](movecar_core::traits::StatusSource) until the car
//! owner confirms.

pub mod http;
pub mod poller;

pub use http::NotifyClient;
pub use poller::{PollOutcome, StatusPoller};
