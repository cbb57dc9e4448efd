//! HTTP API layer for Movecar.
//!
//! Exposes the notification lifecycle over REST: create a notification,
//! read its payload, confirm it, and poll its status. Built on Axum with
//! CORS, request logging, and JSON error responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
