use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::room_type::RoomTypeRepository,
    model::room_type::{CreateRoomTypeParams, UpdateRoomTypeParams},
};

mod create;
mod name_taken;
mod update;
