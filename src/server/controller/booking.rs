use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, UpdateBookingStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::Booking,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

/// List bookings visible to the caller.
///
/// # Access Control
/// - Staff see every booking
/// - Guests see only their own bookings
///
/// # Returns
/// - `200 OK` - Bookings ordered by check-in
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/booking",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db).list(&caller).await?;
    let dtos: Vec<BookingDto> = bookings.into_iter().map(Booking::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single booking.
///
/// # Returns
/// - `200 OK` - The booking
/// - `404 Not Found` - No such booking, or it belongs to another guest
#[utoipa::path(
    get,
    path = "/api/booking/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db).get(&caller, id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Create a booking.
///
/// Guests book for themselves using their profile contact. Staff create walk-in bookings
/// and must supply a guest name plus an email or phone. The total price is the room type's
/// nightly price times the number of nights.
///
/// # Returns
/// - `201 Created` - The PENDING booking
/// - `400 Bad Request` - Invalid dates or missing walk-in contact
/// - `404 Not Found` - Room does not exist
/// - `409 Conflict` - Room already booked for an overlapping range
#[utoipa::path(
    post,
    path = "/api/booking/create",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room unavailable for the dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(&caller, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Move a booking to another status.
///
/// The room's availability follows the booking: CONFIRMED marks it BOOKED, CHECKED_IN marks
/// it OCCUPIED, and leaving the active states frees it unless another active booking holds it.
///
/// # Access Control
/// - Staff may apply any legal transition
/// - Guests may only cancel their own bookings
///
/// # Returns
/// - `200 OK` - Updated booking
/// - `400 Bad Request` - Unknown status or illegal transition
/// - `403 Forbidden` - Guest not allowed to apply the change
/// - `404 Not Found` - Booking does not exist
#[utoipa::path(
    put,
    path = "/api/booking/update/status/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BookingDto),
        (status = 400, description = "Invalid status change", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to change this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .update_status(&caller, id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
