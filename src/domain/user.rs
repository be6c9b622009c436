//! User records.

use super::record::{Record, RecordId};
use super::timestamp::Timestamp;

/// A staff member account.
///
/// `staff_id` and `email` are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier (0 until stored).
    pub id: RecordId,
    /// External staff identifier, e.g. `STF001`.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// When the account was created.
    pub created: Timestamp,
    /// When the person joined.
    pub joined: Timestamp,
    /// Whether the account is active.
    pub enabled: bool,
    /// Contact address.
    pub email: String,
}

impl Record for User {
    const NAME: &'static str = "User";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
