//! HTTP integration tests for the Movecar server.

mod helpers;
mod notification_test;
mod polling_test;
mod status_test;
