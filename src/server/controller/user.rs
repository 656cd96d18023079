use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        user::{PaginatedUsersDto, UpdateAccountStatusDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pagination::PageRequest,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get paginated user accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - Page of accounts ordered by name
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Set a user's account status.
///
/// Used to activate receptionists after they register, or to block an account. Admins
/// cannot change their own status.
///
/// # Access Control
/// - `Admin` - Only admins can change account status
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Target is the caller
/// - `404 Not Found` - No such account
#[utoipa::path(
    put,
    path = "/api/users/{id}/status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateAccountStatusDto,
    responses(
        (status = 200, description = "Status updated", body = UserDto),
        (status = 400, description = "Cannot change own status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAccountStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_account_status(&admin, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
