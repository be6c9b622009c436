//! API module for HTTP handlers.
//!
//! This module contains route definitions and request/response handlers.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{TodoRequest, TodoResponse, UserRequest, UserResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use handlers::{HealthResponse, health_check};
pub use routes::create_router;
pub use state::AppState;
