//! Room domain models and parameters.

use entity::room::RoomAvailability;

use crate::{
    model::room::{PaginatedRoomsDto, RoomDto},
    server::model::pagination::PageRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_type_id: i32,
    pub room_number: i32,
    pub floor: i32,
    pub availability: RoomAvailability,
    pub amenities: Vec<String>,
    /// Present when the room was loaded together with its type.
    pub room_type_name: Option<String>,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_type_id: entity.room_type_id,
            room_number: entity.room_number,
            floor: entity.floor,
            availability: entity.availability,
            amenities: entity.amenities.into_inner(),
            room_type_name: None,
        }
    }

    pub fn from_entity_with_type(
        entity: entity::room::Model,
        room_type: Option<entity::room_type::Model>,
    ) -> Self {
        Self {
            room_type_name: room_type.map(|rt| rt.name),
            ..Self::from_entity(entity)
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            floor: self.floor,
            availability: self.availability,
            amenities: self.amenities,
            room_type_id: self.room_type_id,
            room_type_name: self.room_type_name,
        }
    }
}

/// Next room number on a floor: `floor * 100 + (last % 100 + 1)`, or `floor * 100 + 1` when the
/// floor has no rooms yet.
pub fn next_room_number(floor: i32, last_on_floor: Option<i32>) -> i32 {
    let sequence = last_on_floor.map(|last| last % 100 + 1).unwrap_or(1);
    floor * 100 + sequence
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_type_id: i32,
    pub floor: i32,
    pub room_number: i32,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub room_type_id: Option<i32>,
    pub floor: Option<i32>,
    pub availability: Option<RoomAvailability>,
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSort {
    #[default]
    RoomNumberAsc,
    RoomNumberDesc,
}

impl RoomSort {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("roomnumber-desc") => RoomSort::RoomNumberDesc,
            _ => RoomSort::RoomNumberAsc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoomFilter {
    pub floor: Option<i32>,
    pub availability: Option<RoomAvailability>,
    pub room_type_id: Option<i32>,
    pub sort: RoomSort,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct PaginatedRooms {
    pub rooms: Vec<Room>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedRooms {
    pub fn into_dto(self) -> PaginatedRoomsDto {
        PaginatedRoomsDto {
            rooms: self.rooms.into_iter().map(Room::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
