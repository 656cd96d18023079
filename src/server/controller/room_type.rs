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
        room_type::{CreateRoomTypeDto, PaginatedRoomTypesDto, RoomTypeDto, UpdateRoomTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{pagination::PageRequest, room_type::UpdateRoomTypeParams},
        service::room_type::RoomTypeService,
        state::AppState,
    },
};

/// Tag for grouping room type endpoints in OpenAPI documentation
pub static ROOM_TYPE_TAG: &str = "room types";

/// Get paginated room types ordered by name.
#[utoipa::path(
    get,
    path = "/api/roomtype",
    tag = ROOM_TYPE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of room types", body = PaginatedRoomTypesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomTypeService::new(&state.db)
        .get_paginated(PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(room_types.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/roomtype/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Room type", body = RoomTypeDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = RoomTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// Create a room type.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
///
/// # Returns
/// - `201 Created` - The room type
/// - `400 Bad Request` - Empty name, negative price or invalid capacity
/// - `409 Conflict` - Name already used, ignoring case and surrounding whitespace
#[utoipa::path(
    post,
    path = "/api/roomtype/create",
    tag = ROOM_TYPE_TAG,
    request_body = CreateRoomTypeDto,
    responses(
        (status = 201, description = "Room type created", body = RoomTypeDto),
        (status = 400, description = "Invalid room type data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 409, description = "Room type name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(room_type.into_dto())))
}

/// Update a room type; absent fields keep their value.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
#[utoipa::path(
    put,
    path = "/api/roomtype/update/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    request_body = UpdateRoomTypeDto,
    responses(
        (status = 200, description = "Room type updated", body = RoomTypeDto),
        (status = 400, description = "Invalid room type data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 409, description = "Room type name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .update(UpdateRoomTypeParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// Delete a room type no room references.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
#[utoipa::path(
    delete,
    path = "/api/roomtype/delete/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 204, description = "Room type deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 409, description = "Rooms still use this room type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    RoomTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
