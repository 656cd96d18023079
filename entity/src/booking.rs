use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a booking.
///
/// ```text
/// PENDING -> CONFIRMED -> CHECKED_IN -> CHECKED_OUT
///    \           \
///     +-----------+--> CANCELLED
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    #[sea_orm(string_value = "CHECKED_IN")]
    CheckedIn,
    #[sea_orm(string_value = "CHECKED_OUT")]
    CheckedOut,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl BookingStatus {
    /// Statuses that block the room for the booking's date range.
    pub const ACTIVE: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::CheckedIn => "CHECKED_IN",
            BookingStatus::CheckedOut => "CHECKED_OUT",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CHECKED_IN" => Some(BookingStatus::CheckedIn),
            "CHECKED_OUT" => Some(BookingStatus::CheckedOut),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// The complete transition table.
    pub fn allowed_transitions(&self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => &[BookingStatus::CheckedIn, BookingStatus::Cancelled],
            BookingStatus::CheckedIn => &[BookingStatus::CheckedOut],
            BookingStatus::CheckedOut | BookingStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Registered guest; `None` for walk-in bookings.
    #[sea_orm(nullable)]
    pub guest_id: Option<i32>,
    pub guest_name: String,
    #[sea_orm(nullable)]
    pub guest_email: Option<String>,
    #[sea_orm(nullable)]
    pub guest_phone: Option<String>,
    pub room_id: i32,
    pub check_in: DateTimeUtc,
    /// Exclusive end of the stay.
    pub check_out: DateTimeUtc,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuestId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
