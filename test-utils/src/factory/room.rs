//! Room factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::room::RoomAvailability;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_type_id: i32,
    floor: i32,
    room_number: i32,
    availability: RoomAvailability,
    amenities: Vec<String>,
}

impl<'a> RoomFactory<'a> {
    /// Defaults: floor 1, a unique room number above 1000, AVAILABLE, no amenities.
    ///
    /// Set `floor` and `room_number` together when a test depends on numbering.
    pub fn new(db: &'a DatabaseConnection, room_type_id: i32) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            room_type_id,
            floor: 1,
            room_number: 1000 + id,
            availability: RoomAvailability::Available,
            amenities: Vec::new(),
        }
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    pub fn availability(mut self, availability: RoomAvailability) -> Self {
        self.availability = availability;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.amenities = amenities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_type_id: ActiveValue::Set(self.room_type_id),
            room_number: ActiveValue::Set(self.room_number),
            floor: ActiveValue::Set(self.floor),
            availability: ActiveValue::Set(self.availability),
            amenities: ActiveValue::Set(entity::StringList(self.amenities)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, room_type_id).build().await
}
