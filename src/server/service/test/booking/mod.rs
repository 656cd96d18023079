use entity::{booking::BookingStatus, room::RoomAvailability};
use test_utils::{builder::TestBuilder, factory};

use super::date_from_today;
use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        booking::{BookingGuest, BookingRequest},
        user::User,
    },
    service::booking::BookingService,
};

mod create;
mod list;
mod update_status;

/// A request for `nights` nights starting `start` days from today.
fn request(room_id: i32, start: i64, nights: i64) -> BookingRequest {
    BookingRequest {
        room_id,
        check_in: date_from_today(start),
        check_out: date_from_today(start + nights),
        guest_name: None,
        guest_email: None,
        guest_phone: None,
    }
}
