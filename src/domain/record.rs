//! The record abstraction shared by every collection.

use std::fmt::Debug;

/// Identifier of a record within its collection.
///
/// Signed so that the non-positive values a client can send are representable
/// and can be rejected as "not found" rather than failing to parse.
pub type RecordId = i64;

/// A record stored in a sequential collection.
///
/// Identifiers are owned by the store: the id a caller supplies on create is
/// overwritten, and the store relies on `id == position + 1`.
pub trait Record: Debug + Clone + Send + Sync + 'static {
    /// Human-readable collection label, used in "not found" messages.
    const NAME: &'static str;

    /// Returns the record's identifier.
    fn id(&self) -> RecordId;

    /// Overwrites the record's identifier.
    fn assign_id(&mut self, id: RecordId);
}

/// Resolves a 1-based identifier to a position in a collection of `len`
/// records.
///
/// Returns `None` for `id < 1` and for `id > len`.
#[must_use]
pub fn position_of(id: RecordId, len: usize) -> Option<usize> {
    let position = usize::try_from(id.checked_sub(1)?).ok()?;
    (position < len).then_some(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 3, Some(0))]
    #[case(3, 3, Some(2))]
    #[case(4, 3, None)]
    #[case(0, 3, None)]
    #[case(-1, 3, None)]
    #[case(RecordId::MIN, 3, None)]
    #[case(1, 0, None)]
    fn position_of_resolves_only_in_range_ids(
        #[case] id: RecordId,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(position_of(id, len), expected);
    }
}
