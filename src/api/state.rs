//! Shared application state.

use std::sync::Arc;

use crate::domain::{Task, User};
use crate::infrastructure::{InMemoryRecordRepository, RecordRepository, seed};

/// Shared application dependencies.
///
/// Each collection is injected as a trait object so tests can build an
/// isolated state per case.
#[derive(Clone)]
pub struct AppState {
    /// Task collection.
    pub task_repository: Arc<dyn RecordRepository<Task>>,
    /// User collection.
    pub user_repository: Arc<dyn RecordRepository<User>>,
}

impl AppState {
    /// Creates an `AppState` from existing repositories.
    #[must_use]
    pub fn new(
        task_repository: Arc<dyn RecordRepository<Task>>,
        user_repository: Arc<dyn RecordRepository<User>>,
    ) -> Self {
        Self {
            task_repository,
            user_repository,
        }
    }

    /// Creates an `AppState` with two empty in-memory collections.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(
            Arc::new(InMemoryRecordRepository::<Task>::new()),
            Arc::new(InMemoryRecordRepository::<User>::new()),
        )
    }

    /// Creates an `AppState` whose collections hold the fixture records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(seed::seeded_tasks()),
            Arc::new(seed::seeded_users()),
        )
    }
}
