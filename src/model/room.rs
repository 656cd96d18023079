use entity::room::RoomAvailability;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{default_limit, default_page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: i32,
    pub floor: i32,
    pub availability: RoomAvailability,
    pub amenities: Vec<String>,
    pub room_type_id: i32,
    pub room_type_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRoomsDto {
    pub rooms: Vec<RoomDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RoomListParams {
    pub floor: Option<i32>,
    pub availability: Option<RoomAvailability>,
    /// Room type id filter.
    pub roomtype: Option<i32>,
    /// `roomnumber-asc` (default) or `roomnumber-desc`.
    pub sort: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// The room number is assigned from the floor.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub room_type_id: i32,
    pub floor: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub room_type_id: Option<i32>,
    /// Changing the floor assigns a new room number.
    pub floor: Option<i32>,
    pub availability: Option<RoomAvailability>,
    pub amenities: Option<Vec<String>>,
}
