//! # movecar-push
//!
//! Push delivery for Movecar. The production implementation talks to
//! [ServerChan](https://sct.ftqq.com/); the `mock` feature adds an
//! in-memory gateway for tests.

#[cfg(feature = "mock")]
pub mod mock;
pub mod serverchan;

pub use serverchan::ServerChanGateway;
