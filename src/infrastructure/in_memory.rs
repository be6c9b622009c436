//! In-memory repository implementation.
//!
//! One `Vec` per collection behind a `parking_lot::RwLock`: lookups and page
//! reads share the lock, creates and updates take it exclusively. No guard is
//! ever held across an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{Page, PageRequest, Record, RecordId, position_of};
use crate::infrastructure::{RecordRepository, RepositoryError};

// =============================================================================
// In-Memory Record Repository
// =============================================================================

/// In-memory implementation of `RecordRepository`.
///
/// Records are held in insertion order and `records[i].id == i + 1` for
/// every stored record.
///
/// # Example
///
/// ```
/// use records_api::domain::{Task, Timestamp};
/// use records_api::infrastructure::{InMemoryRecordRepository, RecordRepository};
///
/// let repository = InMemoryRecordRepository::<Task>::new();
/// let date = Timestamp::from_parts(2024, 10, 1, 9, 0).unwrap();
///
/// let task = repository.create(Task::new("Write report", date, false));
/// assert_eq!(task.id, 1);
/// assert_eq!(repository.find_by_id(1).unwrap(), task);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRecordRepository<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> InMemoryRecordRepository<R> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a repository holding `records`, renumbered from 1 in order.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        let repository = Self::new();
        for record in records {
            repository.create(record);
        }
        repository
    }
}

impl<R: Record> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    fn find_by_id(&self, id: RecordId) -> Result<R, RepositoryError> {
        let guard = self.records.read();
        position_of(id, guard.len())
            .map(|position| guard[position].clone())
            .ok_or_else(|| RepositoryError::not_found::<R>(id))
    }

    fn list(&self, request: PageRequest) -> Page<R> {
        let guard = self.records.read();
        let page = Page::slice(guard.as_slice(), request);
        drop(guard);

        tracing::debug!(
            kind = R::NAME,
            page = request.page,
            page_size = request.page_size,
            rows = page.page.len(),
            total_rows = page.total_rows,
            "Listed page"
        );
        page
    }

    fn create(&self, mut record: R) -> R {
        let mut guard = self.records.write();
        // Length and push happen under one guard, so ids never collide.
        let id = RecordId::try_from(guard.len()).map_or(RecordId::MAX, |len| len + 1);
        record.assign_id(id);
        guard.push(record.clone());
        drop(guard);

        tracing::debug!(kind = R::NAME, id, "Created record");
        record
    }

    fn update(&self, record: R) -> Result<R, RepositoryError> {
        let id = record.id();
        let mut guard = self.records.write();
        let position =
            position_of(id, guard.len()).ok_or_else(|| RepositoryError::not_found::<R>(id))?;
        guard[position] = record.clone();
        drop(guard);

        tracing::debug!(kind = R::NAME, id, "Replaced record");
        Ok(record)
    }

    fn count(&self) -> usize {
        self.records.read().len()
    }
}

// =============================================================================
// Tests
// =============================================================================
