//! Newtype wrapper around [`uuid::Uuid`] for notification identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token identifying one notification request.
///
/// The same id addresses both the stored payload and its confirmation
/// status. It travels as a plain UUID string in URLs, so the UUID's
/// randomness is the only thing standing between a stranger and the
/// confirm action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotifyId(pub Uuid);

impl NotifyId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Return a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NotifyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotifyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotifyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for NotifyId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<NotifyId> for Uuid {
    fn from(id: NotifyId) -> Uuid {
        id.0
    }
}
