//! # movecar-core
//!
//! Core crate for Movecar. Contains the shared domain types, capability
//! traits, configuration schema, and the unified error system.
//!
//! This crate must not depend on any other Movecar crate.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
