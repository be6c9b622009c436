//! HTTP handlers, one module per collection.
//!
//! The store never suspends, but axum handlers must be `async`.

#![allow(clippy::unused_async)]

pub mod health;
pub mod todo;
pub mod user;

pub use health::{HealthResponse, health_check};
pub use todo::{create_todo, get_todo, list_todos, update_todo};
pub use user::{create_user, get_user, list_users, update_user};
