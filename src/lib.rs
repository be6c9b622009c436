//! # records-api
//!
//! An HTTP service holding two in-memory record collections, tasks and
//! users, with lookup by id, creation, full replacement, and paginated
//! listing.
//!
//! ## Layout
//!
//! - [`domain`]: record types, the [`domain::Record`] abstraction, pagination
//! - [`infrastructure`]: the generic in-memory store, fixtures, configuration
//! - [`api`]: DTOs, handlers, error responses, and the router
//! - [`server`]: binding and graceful shutdown
//!
//! ## Example
//!
//! ```rust
//! use records_api::domain::{PageRequest, Task, Timestamp};
//! use records_api::infrastructure::{InMemoryRecordRepository, RecordRepository};
//!
//! let tasks = InMemoryRecordRepository::<Task>::new();
//! let date = Timestamp::parse("2024-10-01T09:00").unwrap();
//! let created = tasks.create(Task::new("Write report", date, false));
//!
//! assert_eq!(created.id, 1);
//! assert_eq!(tasks.list(PageRequest::new(1, 10)).total_rows, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
