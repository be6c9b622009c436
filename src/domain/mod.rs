//! Domain layer.
//!
//! Record types, the record abstraction the store is generic over,
//! and the pagination arithmetic.

pub mod page;
pub mod record;
pub mod task;
pub mod timestamp;
pub mod user;

pub use page::{Page, PageRequest};
pub use record::{Record, RecordId, position_of};
pub use task::Task;
pub use timestamp::{Timestamp, TimestampParseError};
pub use user::User;
