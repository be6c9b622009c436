//! Infrastructure module.
//!
//! Record storage, fixture seeding, and configuration loading.

pub mod config;
pub mod in_memory;
pub mod repository;
pub mod seed;

pub use config::{AppConfig, ConfigError};
pub use in_memory::InMemoryRecordRepository;
pub use repository::{RecordRepository, RepositoryError};
