use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Availability state of a physical room.
///
/// `Booked` and `Occupied` are derived from the room's active bookings and are only written by
/// the booking status transition step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomAvailability {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "BOOKED")]
    Booked,
    #[sea_orm(string_value = "OCCUPIED")]
    Occupied,
    #[sea_orm(string_value = "UNDER_MAINTENANCE")]
    UnderMaintenance,
    #[sea_orm(string_value = "CLEANING")]
    Cleaning,
}

impl RoomAvailability {
    /// Whether the state is owned by the booking lifecycle rather than by staff edits.
    pub fn is_lifecycle_managed(&self) -> bool {
        matches!(self, RoomAvailability::Booked | RoomAvailability::Occupied)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_type_id: i32,
    #[sea_orm(unique)]
    pub room_number: i32,
    pub floor: i32,
    pub availability: RoomAvailability,
    /// Amenity names as a JSON array.
    #[sea_orm(column_type = "Json")]
    pub amenities: crate::StringList,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    RoomType,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
