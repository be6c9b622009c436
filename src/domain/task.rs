//! Task records.

use super::record::{Record, RecordId};
use super::timestamp::Timestamp;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Store-assigned identifier (0 until stored).
    pub id: RecordId,
    /// Free-text description of the work.
    pub description: String,
    /// When the task is scheduled.
    pub date: Timestamp,
    /// Whether the task has been completed.
    pub done: bool,
}

impl Task {
    /// Creates an unsaved task.
    #[must_use]
    pub fn new(description: impl Into<String>, date: Timestamp, done: bool) -> Self {
        Self {
            id: 0,
            description: description.into(),
            date,
            done,
        }
    }

    /// Returns the same task carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }
}

impl Record for Task {
    const NAME: &'static str = "Todo";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
