//! Result of creating a notification.

use movecar_core::types::id::NotifyId;

/// What happened when a notification was created.
///
/// Both variants mean the record was stored and is fully usable; they
/// differ only in whether the push gateway accepted the alert. Callers
/// that only need the id can ignore the distinction, but the API layer
/// reports it so a requester knows the driver may not have been told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Stored and the push gateway accepted the alert.
    Created { id: NotifyId },
    /// Stored, but push delivery failed. The record can still be read
    /// and confirmed; only the alert went missing.
    CreatedButNotDelivered { id: NotifyId, reason: String },
}

impl CreateOutcome {
    /// The id of the stored notification.
    pub fn id(&self) -> NotifyId {
        match self {
            Self::Created { id } => *id,
            Self::CreatedButNotDelivered { id, .. } => *id,
        }
    }

    /// Whether the push gateway accepted the alert.
    pub fn delivered(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// Why delivery failed, when it did.
    pub fn delivery_failure(&self) -> Option<&str> {
        match self {
            Self::Created { .. } => None,
            Self::CreatedButNotDelivered { reason, .. } => Some(reason),
        }
    }
}
