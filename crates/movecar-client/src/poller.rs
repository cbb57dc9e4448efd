//! Status polling for the blocked driver's wait loop.
//!
//! Polls a [`StatusSource`] at a fixed cadence until the notification
//! is confirmed. The first poll fires immediately so an
//! already-confirmed notification is observed without waiting a full
//! interval.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt, stream};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use movecar_core::traits::StatusSource;
use movecar_core::types::{NotifyId, NotifyStatus};

/// Time between consecutive status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How a wait loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The car owner confirmed the notification.
    Confirmed,
    /// The caller cancelled the wait.
    Cancelled,
}

/// Polls a [`StatusSource`] until a notification is confirmed.
pub struct StatusPoller<S: StatusSource + 'static> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: StatusSource + 'static> StatusPoller<S> {
    /// Creates a poller with the default interval.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the polling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns a stream of observed statuses for `id`.
    ///
    /// Polls immediately, then once per interval. The stream ends after
    /// the first `Confirmed` item. Poll failures are transient: they
    /// are logged and the next attempt happens on the regular cadence.
    /// Dropping the stream stops polling; a fresh stream for the same
    /// id starts over with an immediate poll.
    pub fn updates(&self, id: NotifyId) -> impl Stream<Item = NotifyStatus> + Send + use<S> {
        let source = Arc::clone(&self.source);
        let interval = self.interval;

        stream::unfold(PollCursor::First, move |cursor| {
            let source = Arc::clone(&source);
            async move {
                let mut wait_first = match cursor {
                    PollCursor::Done => return None,
                    PollCursor::First => false,
                    PollCursor::Pending => true,
                };

                loop {
                    if wait_first {
                        tokio::time::sleep(interval).await;
                    }
                    wait_first = true;

                    match source.poll_status(id).await {
                        Ok(NotifyStatus::Confirmed) => {
                            return Some((NotifyStatus::Confirmed, PollCursor::Done));
                        }
                        Ok(status) => return Some((status, PollCursor::Pending)),
                        Err(e) => {
                            warn!(%id, error = %e, "Status poll failed; will retry");
                        }
                    }
                }
            }
        })
    }

    /// Waits until the notification is confirmed or `cancel` fires.
    ///
    /// Returns promptly on cancellation without leaving a timer behind.
    pub async fn wait_until_confirmed(
        &self,
        id: NotifyId,
        cancel: CancellationToken,
    ) -> PollOutcome {
        let mut updates = std::pin::pin!(self.updates(id));

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(%id, "Wait cancelled");
                    return PollOutcome::Cancelled;
                }
                status = updates.next() => match status {
                    Some(NotifyStatus::Waiting) => {}
                    // The stream only ends after yielding `Confirmed`.
                    Some(NotifyStatus::Confirmed) | None => {
                        info!(%id, "Notification confirmed");
                        return PollOutcome::Confirmed;
                    }
                },
            }
        }
    }
}

impl<S: StatusSource + 'static> Clone for StatusPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            interval: self.interval,
        }
    }
}

impl<S: StatusSource + 'static> fmt::Debug for StatusPoller<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusPoller")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Where the poll stream resumes on the next item request.
enum PollCursor {
    /// No poll has happened yet; the next one fires immediately.
    First,
    /// At least one status was observed; the next poll waits an interval.
    Pending,
    /// A confirmation was delivered; the stream is exhausted.
    Done,
}
