//! Core traits defined in `movecar-core` and implemented by other crates.

pub mod kv;
pub mod push;
pub mod status;

pub use kv::KvStore;
pub use push::PushGateway;
pub use status::StatusSource;
