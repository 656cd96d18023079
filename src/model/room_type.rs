use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomTypeDto {
    pub id: i32,
    pub name: String,
    /// Nightly price in the smallest currency unit.
    pub price_per_night: i64,
    pub description: String,
    pub max_adults: i32,
    pub max_children: i32,
    pub max_persons: i32,
    pub image_urls: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRoomTypesDto {
    pub room_types: Vec<RoomTypeDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoomTypeDto {
    pub name: String,
    pub price_per_night: i64,
    pub description: Option<String>,
    /// Defaults to 1.
    pub max_adults: Option<i32>,
    /// Defaults to 0.
    pub max_children: Option<i32>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoomTypeDto {
    pub name: Option<String>,
    pub price_per_night: Option<i64>,
    pub description: Option<String>,
    pub max_adults: Option<i32>,
    pub max_children: Option<i32>,
    pub image_urls: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
