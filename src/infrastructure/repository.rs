//! Repository trait for record collections.

use thiserror::Error;

use crate::domain::{Page, PageRequest, Record, RecordId};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The identifier does not resolve within the collection's bounds.
    #[error("{kind} not found")]
    NotFound {
        /// Collection label, e.g. `Todo`.
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: RecordId,
    },
}

impl RepositoryError {
    /// Creates a `NotFound` error for record type `R`.
    #[must_use]
    pub const fn not_found<R: Record>(id: RecordId) -> Self {
        Self::NotFound { kind: R::NAME, id }
    }
}

// =============================================================================
// Record Repository
// =============================================================================

/// Repository for one collection of records.
///
/// Every operation runs to completion without suspending, so the methods
/// are synchronous. Implementations must serialize `create` and `update`
/// so that identifiers stay sequential under concurrent callers.
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Returns the record with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` unless `1 <= id <= count()`.
    fn find_by_id(&self, id: RecordId) -> Result<R, RepositoryError>;

    /// Returns the page `request` selects. Never fails.
    fn list(&self, request: PageRequest) -> Page<R>;

    /// Appends `record`, assigning it the next identifier.
    ///
    /// Any identifier already on `record` is overwritten.
    fn create(&self, record: R) -> R;

    /// Replaces the stored record that has `record`'s identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the identifier does not resolve.
    fn update(&self, record: R) -> Result<R, RepositoryError>;

    /// Returns the number of records.
    fn count(&self) -> usize;
}
