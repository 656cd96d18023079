//! Booking domain models and parameters.
//!
//! A booking belongs either to a registered guest account or to a walk-in guest known only by
//! contact details. The stay is the half-open range `[check_in, check_out)`.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{error::booking::BookingError, util::parse::parse_date},
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Contact details recorded on the booking itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Who the booking is for.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingGuest {
    /// A guest account; the contact is copied from the profile at booking time.
    Registered { user_id: i32, contact: GuestContact },
    /// A guest without an account, booked by staff.
    WalkIn(GuestContact),
}

impl BookingGuest {
    pub fn contact(&self) -> &GuestContact {
        match self {
            BookingGuest::Registered { contact, .. } => contact,
            BookingGuest::WalkIn(contact) => contact,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            BookingGuest::Registered { user_id, .. } => Some(*user_id),
            BookingGuest::WalkIn(_) => None,
        }
    }
}

/// A validated stay range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl StayDates {
    /// Parses both dates and requires check-out strictly after check-in.
    ///
    /// # Returns
    /// - `Ok(StayDates)` - Valid range
    /// - `Err(BookingError::InvalidDate)` - Either date missing or unparseable
    /// - `Err(BookingError::InvalidRange)` - Check-out not after check-in
    pub fn parse(check_in: Option<&str>, check_out: Option<&str>) -> Result<Self, BookingError> {
        let check_in = parse_date(check_in)?;
        let check_out = parse_date(check_out)?;

        Self::new(check_in, check_out)
    }

    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidRange);
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Rejects ranges where either calendar day (UTC) precedes `now`'s calendar day.
    pub fn ensure_not_past(&self, now: DateTime<Utc>) -> Result<(), BookingError> {
        let today = now.date_naive();
        if self.check_in.date_naive() < today || self.check_out.date_naive() < today {
            return Err(BookingError::PastDate);
        }

        Ok(())
    }

    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }
}

/// Number of nights billed for a stay: the day difference rounded up.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let seconds = (check_out - check_in).num_seconds().max(0);
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub guest: BookingGuest,
    pub room_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        let contact = GuestContact {
            name: entity.guest_name,
            email: entity.guest_email,
            phone: entity.guest_phone,
        };
        let guest = match entity.guest_id {
            Some(user_id) => BookingGuest::Registered { user_id, contact },
            None => BookingGuest::WalkIn(contact),
        };

        Self {
            id: entity.id,
            guest,
            room_id: entity.room_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            status: entity.status,
            total_price: entity.total_price,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        let nights = nights_between(self.check_in, self.check_out);
        let guest_id = self.guest.user_id();
        let contact = match self.guest {
            BookingGuest::Registered { contact, .. } => contact,
            BookingGuest::WalkIn(contact) => contact,
        };

        BookingDto {
            id: self.id,
            room_id: self.room_id,
            guest_id,
            guest_name: contact.name,
            guest_email: contact.email,
            guest_phone: contact.phone,
            check_in: self.check_in,
            check_out: self.check_out,
            nights,
            status: self.status,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}

/// A booking request as received, before the caller's role decides who the guest is.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: i32,
    pub check_in: String,
    pub check_out: String,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
}

impl From<CreateBookingDto> for BookingRequest {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            room_id: dto.room_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guest_name: dto.guest_name,
            guest_email: dto.guest_email,
            guest_phone: dto.guest_phone,
        }
    }
}

/// Row to insert; always starts PENDING.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub guest: BookingGuest,
    pub room_id: i32,
    pub dates: StayDates,
    pub total_price: i64,
}
