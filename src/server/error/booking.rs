use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::booking::BookingStatus;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by availability queries and the booking lifecycle.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// A required date was missing or not `YYYY-MM-DD` / RFC 3339.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Check-out is not strictly after check-in.
    #[error("Check-out date must be after check-in date")]
    InvalidRange,

    /// A queried date falls on a calendar day before today.
    #[error("Dates cannot be in the past")]
    PastDate,

    /// The requested status is not one of the booking statuses.
    #[error("Invalid booking status '{0}'")]
    InvalidStatus(String),

    /// The transition is not in the lifecycle table.
    #[error("Cannot change booking status from {from} to {to}")]
    IllegalTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Staff created a walk-in booking without a guest name.
    #[error("Guest name is required for walk-in bookings")]
    MissingGuestName,

    /// Staff created a walk-in booking without any contact channel.
    #[error("Guest email or phone is required for walk-in bookings")]
    MissingWalkInContact,

    #[error("Room {0} not found")]
    RoomNotFound(i32),

    /// An active booking for the room overlaps the requested range.
    #[error("Room is not available for the selected dates")]
    RoomUnavailable,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RoomNotFound(_) => StatusCode::NOT_FOUND,
            Self::RoomUnavailable => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
