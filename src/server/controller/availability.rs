use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        availability::{
            AvailabilityQuery, AvailableRoomTypeDto, PaginatedAvailableRoomsDto,
            RoomTypeAvailabilityQuery,
        },
    },
    server::{
        error::AppError,
        model::{
            availability::{AvailabilitySort, AvailableRoomType},
            pagination::PageRequest,
        },
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// Tag for grouping availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

/// Search room types with free rooms for a stay.
///
/// A room is free when it has no PENDING, CONFIRMED or CHECKED_IN booking overlapping
/// `[checkin, checkout)`. Public endpoint.
///
/// # Returns
/// - `200 OK` - Room types with their free rooms, sorted per `sort`
/// - `400 Bad Request` - Missing or unparsable dates, empty range, past check-in
#[utoipa::path(
    get,
    path = "/api/available",
    tag = AVAILABILITY_TAG,
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available room types", body = Vec<AvailableRoomTypeDto>),
        (status = 400, description = "Invalid stay dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let results = AvailabilityService::new(&state.db)
        .query_availability(
            query.checkin.as_deref(),
            query.checkout.as_deref(),
            AvailabilitySort::parse(query.sort.as_deref()),
        )
        .await?;

    let dtos: Vec<AvailableRoomTypeDto> = results
        .into_iter()
        .map(AvailableRoomType::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Free rooms of one room type for a stay, paginated.
///
/// # Returns
/// - `200 OK` - Page of free rooms with amenity icons
/// - `400 Bad Request` - Invalid stay dates
/// - `404 Not Found` - Room type does not exist
#[utoipa::path(
    get,
    path = "/api/available/roomtype/{id}",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID"),
        RoomTypeAvailabilityQuery
    ),
    responses(
        (status = 200, description = "Free rooms of the room type", body = PaginatedAvailableRoomsDto),
        (status = 400, description = "Invalid stay dates", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_by_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<RoomTypeAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = AvailabilityService::new(&state.db)
        .query_rooms_by_type(
            id,
            query.checkin.as_deref(),
            query.checkout.as_deref(),
            PageRequest::new(query.page, query.limit),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}
