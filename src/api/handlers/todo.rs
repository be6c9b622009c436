//! Task handlers.
//!
//! - `GET /todo/{id}` - Get a task
//! - `GET /todo/{page}/{page_size}` - List a page of tasks
//! - `POST /todo` - Create a task
//! - `PATCH /todo` - Replace a task

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::{TodoRequest, TodoResponse};
use crate::api::error::ApiErrorResponse;
use crate::api::state::AppState;
use crate::domain::{Page, PageRequest, RecordId, Task};

/// GET /todo/{id} - Get a task.
///
/// # Errors
///
/// Returns `404 Not Found` unless `1 <= id <= number of tasks`.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    let task = state.task_repository.find_by_id(id)?;
    Ok(Json(TodoResponse::from(task)))
}

/// GET /todo/{page}/{page_size} - List a page of tasks.
///
/// Out-of-range pages come back empty with `total_rows` still set.
pub async fn list_todos(
    State(state): State<AppState>,
    Path((page, page_size)): Path<(i64, i64)>,
) -> Json<Page<TodoResponse>> {
    let page = state
        .task_repository
        .list(PageRequest::new(page, page_size));
    Json(page.map(TodoResponse::from))
}

/// POST /todo - Create a task.
///
/// Any `id` in the body is ignored.
///
/// # Response
///
/// - `201 Created` - the stored task with its assigned id
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<TodoRequest>,
) -> (StatusCode, Json<TodoResponse>) {
    let task = state.task_repository.create(Task::from(request));
    (StatusCode::CREATED, Json(TodoResponse::from(task)))
}

/// PATCH /todo - Replace the task whose id is in the body.
///
/// The whole record is replaced; fields are not merged.
///
/// # Errors
///
/// Returns `404 Not Found` if the id does not resolve.
///
/// # Response
///
/// - `201 Created` - the stored task
pub async fn update_todo(
    State(state): State<AppState>,
    Json(request): Json<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiErrorResponse> {
    let task = state.task_repository.update(Task::from(request))?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(task))))
}
