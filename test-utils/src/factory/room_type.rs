//! Room type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Nightly price used when a test does not set one.
pub const DEFAULT_PRICE_PER_NIGHT: i64 = 100;

pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price_per_night: i64,
    description: String,
    max_adults: i32,
    max_children: i32,
    is_active: bool,
}

impl<'a> RoomTypeFactory<'a> {
    /// Defaults: name `"Room Type {id}"`, price 100, 2 adults, 1 child, active.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Room Type {}", id),
            price_per_night: DEFAULT_PRICE_PER_NIGHT,
            description: "Test room type".to_string(),
            max_adults: 2,
            max_children: 1,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_per_night(mut self, price_per_night: i64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    pub fn capacity(mut self, max_adults: i32, max_children: i32) -> Self {
        self.max_adults = max_adults;
        self.max_children = max_children;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            price_per_night: ActiveValue::Set(self.price_per_night),
            description: ActiveValue::Set(self.description),
            max_adults: ActiveValue::Set(self.max_adults),
            max_children: ActiveValue::Set(self.max_children),
            max_persons: ActiveValue::Set(self.max_adults + self.max_children),
            image_urls: ActiveValue::Set(entity::StringList::default()),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
