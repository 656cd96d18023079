use entity::room::RoomAvailability;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository, room_type::RoomTypeRepository},
    error::AppError,
    model::room::{
        next_room_number, CreateRoomParams, PaginatedRooms, Room, RoomFilter, UpdateRoomParams,
    },
};

/// Input for creating a room; the number is derived from the floor.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_type_id: i32,
    pub floor: i32,
    pub amenities: Vec<String>,
}

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: RoomFilter) -> Result<PaginatedRooms, AppError> {
        let (rooms, total) = RoomRepository::new(self.db)
            .get_filtered_paginated(&filter)
            .await?;

        Ok(PaginatedRooms {
            rooms,
            total,
            page: filter.page.page,
            limit: filter.page.limit,
            total_pages: filter.page.total_pages(total),
        })
    }

    pub async fn get(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_with_type(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Creates an AVAILABLE room numbered after the last room on its floor.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError::BadRequest)` - Floor below 1
    /// - `Err(AppError::NotFound)` - Room type does not exist
    pub async fn create(&self, new_room: NewRoom) -> Result<Room, AppError> {
        validate_floor(new_room.floor)?;

        let txn = self.db.begin().await?;

        if RoomTypeRepository::new(&txn)
            .find_by_id(new_room.room_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }

        let room_repo = RoomRepository::new(&txn);
        let last = room_repo.last_number_on_floor(new_room.floor).await?;
        let room = room_repo
            .create(CreateRoomParams {
                room_type_id: new_room.room_type_id,
                floor: new_room.floor,
                room_number: next_room_number(new_room.floor, last),
                amenities: new_room.amenities,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(room_id = room.id, room_number = room.room_number, "Room created");

        Ok(room)
    }

    /// Applies a staff edit to a room.
    ///
    /// Moving to another floor assigns the next number on that floor. BOOKED and OCCUPIED are
    /// owned by the booking lifecycle: they cannot be set here, and a room in either state keeps
    /// it until its bookings move on.
    ///
    /// # Returns
    /// - `Ok(Room)` - The updated room
    /// - `Err(AppError::NotFound)` - Room or new room type does not exist
    /// - `Err(AppError::BadRequest)` - Floor below 1 or availability change not allowed
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, AppError> {
        if let Some(floor) = params.floor {
            validate_floor(floor)?;
        }

        let txn = self.db.begin().await?;

        let room_repo = RoomRepository::new(&txn);
        let room = room_repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if let Some(room_type_id) = params.room_type_id {
            if RoomTypeRepository::new(&txn)
                .find_by_id(room_type_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Room type not found".to_string()));
            }
        }

        if let Some(availability) = params.availability {
            validate_availability_edit(room.availability, availability)?;
        }

        let room_number = match params.floor {
            Some(floor) if floor != room.floor => {
                let last = room_repo.last_number_on_floor(floor).await?;
                Some(next_room_number(floor, last))
            }
            _ => None,
        };

        let updated = room_repo
            .update(params, room_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a room that is not BOOKED or OCCUPIED and has no bookings.
    ///
    /// Bookings keep their room, so a room with booking history stays in the catalog.
    ///
    /// # Returns
    /// - `Ok(())` - Room deleted
    /// - `Err(AppError::NotFound)` - No such room
    /// - `Err(AppError::BadRequest)` - Room is BOOKED or OCCUPIED
    /// - `Err(AppError::Conflict)` - Bookings reference the room
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let room_repo = RoomRepository::new(self.db);

        let room = room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if room.availability.is_lifecycle_managed() {
            return Err(AppError::BadRequest(format!(
                "Room {} cannot be deleted while it is {}",
                room.room_number,
                availability_name(room.availability)
            )));
        }

        let bookings = BookingRepository::new(self.db).count_by_room(id).await?;
        if bookings > 0 {
            return Err(AppError::Conflict(format!(
                "Room {} cannot be deleted while {} booking(s) reference it",
                room.room_number, bookings
            )));
        }

        room_repo.delete(id).await?;

        tracing::info!(room_id = id, "Room deleted");

        Ok(())
    }
}

fn validate_floor(floor: i32) -> Result<(), AppError> {
    if floor < 1 {
        return Err(AppError::BadRequest("Floor must be at least 1".to_string()));
    }

    Ok(())
}

fn validate_availability_edit(
    current: RoomAvailability,
    requested: RoomAvailability,
) -> Result<(), AppError> {
    if requested.is_lifecycle_managed() {
        return Err(AppError::BadRequest(format!(
            "Availability {} is set by bookings and cannot be assigned manually",
            availability_name(requested)
        )));
    }
    if current.is_lifecycle_managed() {
        return Err(AppError::BadRequest(format!(
            "Availability cannot be changed while the room is {}",
            availability_name(current)
        )));
    }

    Ok(())
}

fn availability_name(availability: RoomAvailability) -> &'static str {
    match availability {
        RoomAvailability::Available => "AVAILABLE",
        RoomAvailability::Booked => "BOOKED",
        RoomAvailability::Occupied => "OCCUPIED",
        RoomAvailability::UnderMaintenance => "UNDER_MAINTENANCE",
        RoomAvailability::Cleaning => "CLEANING",
    }
}
