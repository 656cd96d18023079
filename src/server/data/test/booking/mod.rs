use chrono::{DateTime, TimeZone, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::booking::BookingRepository;

mod find_overlapping_room_ids;
mod get_by_guest;
mod has_other_active;
mod overlap_trigger;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}
