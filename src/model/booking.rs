use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    /// `None` for walk-in bookings.
    pub guest_id: Option<i32>,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub nights: i64,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

/// Guest callers book for themselves and the contact fields are ignored. Staff callers create
/// walk-in bookings and must supply a name plus an email or phone.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub room_id: i32,
    pub check_in: String,
    pub check_out: String,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    /// Target status name, e.g. `CONFIRMED`.
    pub status: String,
}
