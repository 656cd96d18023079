//! Availability query models.

use std::cmp::Reverse;

use crate::{
    model::availability::{
        AmenityIconDto, AvailableRoomDto, AvailableRoomTypeDto, PaginatedAvailableRoomsDto,
    },
    server::{
        model::{room::Room, room_type::RoomType},
        util::amenity_icon::icon_for,
    },
};

/// Ordering of room-type availability results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilitySort {
    PriceAsc,
    PriceDesc,
    /// Most available rooms first.
    #[default]
    AvailableCount,
}

impl AvailabilitySort {
    /// Unknown values fall back to the default ordering.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => AvailabilitySort::PriceAsc,
            Some("price-desc") => AvailabilitySort::PriceDesc,
            _ => AvailabilitySort::AvailableCount,
        }
    }

    pub fn apply(&self, results: &mut [AvailableRoomType]) {
        match self {
            AvailabilitySort::PriceAsc => {
                results.sort_by_key(|r| r.room_type.price_per_night);
            }
            AvailabilitySort::PriceDesc => {
                results.sort_by_key(|r| Reverse(r.room_type.price_per_night));
            }
            AvailabilitySort::AvailableCount => {
                results.sort_by_key(|r| Reverse(r.available_count));
            }
        }
    }
}

/// A room type with at least one room free for the queried range.
#[derive(Debug, Clone)]
pub struct AvailableRoomType {
    pub room_type: RoomType,
    pub available_count: u64,
    pub rooms: Vec<Room>,
}

impl AvailableRoomType {
    pub fn into_dto(self) -> AvailableRoomTypeDto {
        AvailableRoomTypeDto {
            room_type: self.room_type.into_dto(),
            available_count: self.available_count,
            rooms: self.rooms.into_iter().map(available_room_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedAvailableRooms {
    pub room_type: RoomType,
    pub rooms: Vec<Room>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedAvailableRooms {
    pub fn into_dto(self) -> PaginatedAvailableRoomsDto {
        PaginatedAvailableRoomsDto {
            room_type: self.room_type.into_dto(),
            rooms: self.rooms.into_iter().map(available_room_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Decorates each amenity name with its display icon.
fn available_room_dto(room: Room) -> AvailableRoomDto {
    AvailableRoomDto {
        id: room.id,
        room_number: room.room_number,
        floor: room.floor,
        availability: room.availability,
        amenities: room
            .amenities
            .into_iter()
            .map(|name| AmenityIconDto {
                icon: icon_for(&name).to_string(),
                name,
            })
            .collect(),
    }
}
