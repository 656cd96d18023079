//! Booking factory.
//!
//! Inserts rows directly, bypassing the lifecycle checks, so tests can arrange any state.

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    guest_id: Option<i32>,
    guest_name: String,
    guest_email: Option<String>,
    guest_phone: Option<String>,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    status: BookingStatus,
    total_price: i64,
}

impl<'a> BookingFactory<'a> {
    /// Defaults: walk-in "Walk-in Guest", two nights starting tomorrow, PENDING, price 200.
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let check_in = Utc::now() + Duration::days(1);
        Self {
            db,
            room_id,
            guest_id: None,
            guest_name: "Walk-in Guest".to_string(),
            guest_email: Some("walkin@hoterra.test".to_string()),
            guest_phone: None,
            check_in,
            check_out: check_in + Duration::days(2),
            status: BookingStatus::Pending,
            total_price: 200,
        }
    }

    /// Makes the booking belong to a registered guest, copying their contact details.
    pub fn guest(mut self, user: &entity::user::Model) -> Self {
        self.guest_id = Some(user.id);
        self.guest_name = user.name.clone();
        self.guest_email = Some(user.email.clone());
        self.guest_phone = user.phone.clone();
        self
    }

    pub fn dates(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            guest_id: ActiveValue::Set(self.guest_id),
            guest_name: ActiveValue::Set(self.guest_name),
            guest_email: ActiveValue::Set(self.guest_email),
            guest_phone: ActiveValue::Set(self.guest_phone),
            room_id: ActiveValue::Set(self.room_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            status: ActiveValue::Set(self.status),
            total_price: ActiveValue::Set(self.total_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id).build().await
}
