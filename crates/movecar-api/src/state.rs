//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use movecar_core::config::AppConfig;
use movecar_service::NotifyService;
use movecar_store::StoreManager;

/// Application state shared across all request handlers.
///
/// Cheap to clone: every field is an `Arc` or `Copy`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────────────
    /// Full application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────────────
    /// Key-value store manager, used by health checks.
    pub store: Arc<StoreManager>,

    // ── Services ─────────────────────────────────────────────────────
    /// Notification lifecycle service.
    pub notify: Arc<NotifyService>,

    // ── Runtime ──────────────────────────────────────────────────────
    /// Process start time, used to report uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Assembles the application state from its constituent parts.
    pub fn new(config: Arc<AppConfig>, store: Arc<StoreManager>, notify: Arc<NotifyService>) -> Self {
        Self {
            config,
            store,
            notify,
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was constructed.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
