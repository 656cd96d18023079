use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, PaginatedRoomsDto, RoomDto, RoomListParams, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            room::{RoomFilter, RoomSort, UpdateRoomParams},
        },
        service::room::{NewRoom, RoomService},
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "rooms";

/// List rooms with optional filters.
///
/// # Returns
/// - `200 OK` - Page of rooms with their room type names
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    params(RoomListParams),
    responses(
        (status = 200, description = "Page of rooms", body = PaginatedRoomsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .list(RoomFilter {
            floor: params.floor,
            availability: params.availability,
            room_type_id: params.roomtype,
            sort: RoomSort::parse(params.sort.as_deref()),
            page: PageRequest::new(params.page, params.limit),
        })
        .await?;

    Ok((StatusCode::OK, Json(rooms.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Create a room.
///
/// The room number is the floor times 100 plus the next sequence on that floor.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
///
/// # Returns
/// - `201 Created` - The AVAILABLE room
/// - `400 Bad Request` - Floor below 1
/// - `404 Not Found` - Room type does not exist
#[utoipa::path(
    post,
    path = "/api/rooms/create",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db)
        .create(NewRoom {
            room_type_id: payload.room_type_id,
            floor: payload.floor,
            amenities: payload.amenities,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Update a room.
///
/// BOOKED and OCCUPIED are driven by bookings and cannot be set or cleared here.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
///
/// # Returns
/// - `200 OK` - Updated room
/// - `400 Bad Request` - Invalid floor or availability change
/// - `404 Not Found` - Room or room type does not exist
#[utoipa::path(
    put,
    path = "/api/rooms/update/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Invalid room change", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Room or room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db)
        .update(UpdateRoomParams {
            id,
            room_type_id: payload.room_type_id,
            floor: payload.floor,
            availability: payload.availability,
            amenities: payload.amenities,
        })
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Delete a room that is not BOOKED or OCCUPIED.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
#[utoipa::path(
    delete,
    path = "/api/rooms/delete/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 400, description = "Room is booked or occupied", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
