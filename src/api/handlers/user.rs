//! User handlers.
//!
//! - `GET /user/{id}` - Get a user
//! - `GET /users/{page}/{page_size}` - List a page of users
//! - `POST /user` - Create a user
//! - `PATCH /user` - Replace a user

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::{UserRequest, UserResponse};
use crate::api::error::ApiErrorResponse;
use crate::api::state::AppState;
use crate::domain::{Page, PageRequest, RecordId, User};

/// GET /user/{id} - Get a user.
///
/// # Errors
///
/// Returns `404 Not Found` unless `1 <= id <= number of users`.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<UserResponse>, ApiErrorResponse> {
    let user = state.user_repository.find_by_id(id)?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{page}/{page_size} - List a page of users.
pub async fn list_users(
    State(state): State<AppState>,
    Path((page, page_size)): Path<(i64, i64)>,
) -> Json<Page<UserResponse>> {
    let page = state
        .user_repository
        .list(PageRequest::new(page, page_size));
    Json(page.map(UserResponse::from))
}

/// POST /user - Create a user.
///
/// # Response
///
/// - `201 Created` - the stored user with its assigned id
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> (StatusCode, Json<UserResponse>) {
    let user = state.user_repository.create(User::from(request));
    (StatusCode::CREATED, Json(UserResponse::from(user)))
}

/// PATCH /user - Replace the user whose id is in the body.
///
/// # Errors
///
/// Returns `404 Not Found` if the id does not resolve.
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiErrorResponse> {
    let user = state.user_repository.update(User::from(request))?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
