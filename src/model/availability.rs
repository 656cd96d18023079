use entity::room::RoomAvailability;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    api::{default_limit, default_page},
    room_type::RoomTypeDto,
};

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Check-in date, `YYYY-MM-DD` or RFC 3339.
    pub checkin: Option<String>,
    /// Check-out date (exclusive), `YYYY-MM-DD` or RFC 3339.
    pub checkout: Option<String>,
    /// `price-asc`, `price-desc`; otherwise most available first.
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RoomTypeAvailabilityQuery {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmenityIconDto {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailableRoomDto {
    pub id: i32,
    pub room_number: i32,
    pub floor: i32,
    pub availability: RoomAvailability,
    pub amenities: Vec<AmenityIconDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailableRoomTypeDto {
    pub room_type: RoomTypeDto,
    pub available_count: u64,
    pub rooms: Vec<AvailableRoomDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAvailableRoomsDto {
    pub room_type: RoomTypeDto,
    pub rooms: Vec<AvailableRoomDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
