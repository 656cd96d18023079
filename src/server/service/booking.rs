//! Booking lifecycle: creation with conflict detection, status transitions and the room
//! availability projection that follows each transition.

use entity::{booking::BookingStatus, room::RoomAvailability};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository, room_type::RoomTypeRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        booking::{
            Booking, BookingGuest, BookingRequest, CreateBookingParams, GuestContact, StayDates,
        },
        user::User,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING booking for the caller.
    ///
    /// Guests always book for themselves with the contact details of their profile. Staff book
    /// walk-in guests and must supply a name plus an email or phone.
    ///
    /// The conflict check, price lookup and insert share one transaction; the storage trigger
    /// rejecting overlapping inserts is reported as the same conflict.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(BookingError::InvalidDate | InvalidRange)` - Bad dates
    /// - `Err(BookingError::MissingGuestName | MissingWalkInContact)` - Incomplete walk-in contact
    /// - `Err(BookingError::RoomNotFound)` - No such room
    /// - `Err(BookingError::RoomUnavailable)` - An active booking overlaps the range
    pub async fn create(&self, caller: &User, request: BookingRequest) -> Result<Booking, AppError> {
        let dates = StayDates::parse(Some(&request.check_in), Some(&request.check_out))?;
        let guest = resolve_guest(caller, &request)?;

        let txn = self.db.begin().await?;

        let room = RoomRepository::new(&txn)
            .find_by_id(request.room_id)
            .await?
            .ok_or(BookingError::RoomNotFound(request.room_id))?;

        let booking_repo = BookingRepository::new(&txn);
        if booking_repo
            .has_overlap(room.id, dates.check_in, dates.check_out)
            .await?
        {
            return Err(BookingError::RoomUnavailable.into());
        }

        let room_type = RoomTypeRepository::new(&txn)
            .find_by_id(room.room_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

        let booking = booking_repo
            .create(CreateBookingParams {
                guest,
                room_id: room.id,
                dates,
                total_price: room_type.price_per_night * dates.nights(),
            })
            .await
            .map_err(overlap_conflict)?;

        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            room_id = booking.room_id,
            created_by = caller.id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Moves a booking to `status` and recomputes its room's availability in the same
    /// transaction.
    ///
    /// Staff may apply any transition in the lifecycle table. Guests may only cancel their own
    /// bookings.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(BookingError::InvalidStatus)` - Unknown status name
    /// - `Err(AppError::NotFound)` - Booking or its room does not exist
    /// - `Err(AuthError::AccessDenied)` - Guest acting on another booking or not cancelling
    /// - `Err(BookingError::IllegalTransition)` - Transition not allowed from the current status
    pub async fn update_status(
        &self,
        caller: &User,
        booking_id: i32,
        status: &str,
    ) -> Result<Booking, AppError> {
        let next = BookingStatus::parse(status.trim())
            .ok_or_else(|| BookingError::InvalidStatus(status.to_string()))?;

        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);
        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !caller.is_staff() {
            let owns = booking.guest.user_id() == Some(caller.id);
            if !owns || next != BookingStatus::Cancelled {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!(
                        "guest may not change booking {} to {}",
                        booking_id, next
                    ),
                )
                .into());
            }
        }

        if !booking.status.can_transition_to(next) {
            return Err(BookingError::IllegalTransition {
                from: booking.status,
                to: next,
            }
            .into());
        }

        let room_repo = RoomRepository::new(&txn);
        if room_repo.find_by_id(booking.room_id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        let updated = booking_repo.set_status(booking.id, next).await?;
        let availability = room_availability_after(&txn, &updated).await?;
        room_repo
            .set_availability(updated.room_id, availability)
            .await?;

        txn.commit().await?;

        tracing::info!(
            booking_id,
            from = %booking.status,
            to = %next,
            changed_by = caller.id,
            "Booking status changed"
        );

        Ok(updated)
    }

    /// Staff see every booking, guests only their own. Earliest check-in first.
    pub async fn list(&self, caller: &User) -> Result<Vec<Booking>, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let bookings = if caller.is_staff() {
            booking_repo.get_all().await?
        } else {
            booking_repo.get_by_guest(caller.id).await?
        };

        Ok(bookings)
    }

    /// Gets a booking visible to the caller; another guest's booking is reported as missing.
    pub async fn get(&self, caller: &User, booking_id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .filter(|b| caller.is_staff() || b.guest.user_id() == Some(caller.id))
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(booking)
    }
}

/// Decides who the booking is for from the caller's role.
fn resolve_guest(caller: &User, request: &BookingRequest) -> Result<BookingGuest, BookingError> {
    if !caller.is_staff() {
        return Ok(BookingGuest::Registered {
            user_id: caller.id,
            contact: GuestContact {
                name: caller.name.clone(),
                email: Some(caller.email.clone()),
                phone: caller.phone.clone(),
            },
        });
    }

    let non_empty = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let name = non_empty(&request.guest_name).ok_or(BookingError::MissingGuestName)?;
    let email = non_empty(&request.guest_email);
    let phone = non_empty(&request.guest_phone);
    if email.is_none() && phone.is_none() {
        return Err(BookingError::MissingWalkInContact);
    }

    Ok(BookingGuest::WalkIn(GuestContact { name, email, phone }))
}

/// Availability the room takes once `booking` is in its new status.
async fn room_availability_after<C: ConnectionTrait>(
    db: &C,
    booking: &Booking,
) -> Result<RoomAvailability, DbErr> {
    let availability = match booking.status {
        BookingStatus::Pending | BookingStatus::Confirmed => RoomAvailability::Booked,
        BookingStatus::CheckedIn => RoomAvailability::Occupied,
        BookingStatus::CheckedOut | BookingStatus::Cancelled => {
            let still_booked = BookingRepository::new(db)
                .has_other_active(booking.room_id, booking.id)
                .await?;
            if still_booked {
                RoomAvailability::Booked
            } else {
                RoomAvailability::Available
            }
        }
    };

    Ok(availability)
}

/// Maps the overlap trigger's abort to a booking conflict.
fn overlap_conflict(err: DbErr) -> AppError {
    if err.to_string().contains(migration::BOOKING_OVERLAP_MESSAGE) {
        BookingError::RoomUnavailable.into()
    } else {
        err.into()
    }
}
