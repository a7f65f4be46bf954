//! Reclamation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use comptoir_core::EmailAddress;

/// Reclamation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReclamationId(Uuid);

impl ReclamationId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for ReclamationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ReclamationId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ReclamationId> for Uuid {
    fn from(value: ReclamationId) -> Self {
        value.0
    }
}

/// A stored reclamation, as read back from a store.
///
/// The store stamps `id` and `date_created`; the email is kept as plain
/// text because it was validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reclamation {
    pub id: ReclamationId,
    pub email: String,
    pub message: String,
    pub date_created: DateTime<Utc>,
}

/// A validated submission, not yet stamped with an id or timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReclamation {
    pub email: EmailAddress,
    pub message: String,
}
