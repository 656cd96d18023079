//! Booking data repository.
//!
//! Overlap queries treat stays as half-open ranges: an existing booking conflicts with
//! `[check_in, check_out)` when `existing.check_in < check_out AND existing.check_out > check_in`
//! and its status is one of [`BookingStatus::ACTIVE`].

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::booking::{Booking, CreateBookingParams};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking with status PENDING.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let guest_id = params.guest.user_id();
        let contact = params.guest.contact().clone();

        let entity = entity::booking::ActiveModel {
            guest_id: ActiveValue::Set(guest_id),
            guest_name: ActiveValue::Set(contact.name),
            guest_email: ActiveValue::Set(contact.email),
            guest_phone: ActiveValue::Set(contact.phone),
            room_id: ActiveValue::Set(params.room_id),
            check_in: ActiveValue::Set(params.dates.check_in),
            check_out: ActiveValue::Set(params.dates.check_out),
            status: ActiveValue::Set(BookingStatus::Pending),
            total_price: ActiveValue::Set(params.total_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Distinct ids of rooms with an active booking overlapping the range.
    pub async fn find_overlapping_room_ids(
        &self,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::RoomId)
            .distinct()
            .filter(entity::booking::Column::Status.is_in(BookingStatus::ACTIVE))
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Whether the room has an active booking overlapping the range.
    pub async fn has_overlap(
        &self,
        room_id: i32,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Status.is_in(BookingStatus::ACTIVE))
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any active booking other than `exclude_id` references the room.
    pub async fn has_other_active(&self, room_id: i32, exclude_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Id.ne(exclude_id))
            .filter(entity::booking::Column::Status.is_in(BookingStatus::ACTIVE))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of bookings of any status that reference the room.
    pub async fn count_by_room(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .count(self.db)
            .await
    }

    /// Writes the booking status.
    pub async fn set_status(&self, id: i32, status: BookingStatus) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// All bookings, earliest check-in first.
    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::CheckIn)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Bookings owned by a guest account, earliest check-in first.
    pub async fn get_by_guest(&self, guest_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::GuestId.eq(guest_id))
            .order_by_asc(entity::booking::Column::CheckIn)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }
}
