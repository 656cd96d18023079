use entity::room::RoomAvailability;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::room::RoomRepository,
    model::{
        pagination::PageRequest,
        room::{RoomFilter, RoomSort},
    },
};

mod get_filtered_paginated;
mod last_number_on_floor;
mod set_availability;
