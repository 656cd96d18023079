//! Date-range availability queries.
//!
//! A room is available for `[check_in, check_out)` unless an active booking for it overlaps the
//! range. Only the overlapping bookings are excluded; the room's own availability state is not
//! consulted.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository, room_type::RoomTypeRepository},
    error::AppError,
    model::{
        availability::{AvailabilitySort, AvailableRoomType, PaginatedAvailableRooms},
        booking::StayDates,
        pagination::PageRequest,
        room::Room,
    },
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Room types with at least one free room for the range, each with its free rooms.
    ///
    /// # Returns
    /// - `Ok(Vec<AvailableRoomType>)` - Sorted per `sort`
    /// - `Err(BookingError::InvalidDate | InvalidRange | PastDate)` - Bad query dates
    pub async fn query_availability(
        &self,
        check_in: Option<&str>,
        check_out: Option<&str>,
        sort: AvailabilitySort,
    ) -> Result<Vec<AvailableRoomType>, AppError> {
        let dates = self.validate(check_in, check_out)?;

        let excluded = BookingRepository::new(self.db)
            .find_overlapping_room_ids(dates.check_in, dates.check_out)
            .await?;
        let rooms = RoomRepository::new(self.db)
            .find_excluding(excluded)
            .await?;

        let mut by_type: BTreeMap<i32, Vec<Room>> = BTreeMap::new();
        for room in rooms {
            by_type.entry(room.room_type_id).or_default().push(room);
        }

        let room_types = RoomTypeRepository::new(self.db)
            .find_by_ids(by_type.keys().copied().collect())
            .await?;

        let mut results: Vec<AvailableRoomType> = room_types
            .into_iter()
            .filter_map(|room_type| {
                let rooms = by_type.remove(&room_type.id)?;
                Some(AvailableRoomType {
                    available_count: rooms.len() as u64,
                    room_type,
                    rooms,
                })
            })
            .collect();

        sort.apply(&mut results);

        Ok(results)
    }

    /// Free rooms of one room type for the range, paginated.
    ///
    /// # Returns
    /// - `Ok(PaginatedAvailableRooms)` - The page of free rooms
    /// - `Err(BookingError::InvalidDate | InvalidRange | PastDate)` - Bad query dates
    /// - `Err(AppError::NotFound)` - Room type does not exist
    pub async fn query_rooms_by_type(
        &self,
        room_type_id: i32,
        check_in: Option<&str>,
        check_out: Option<&str>,
        page: PageRequest,
    ) -> Result<PaginatedAvailableRooms, AppError> {
        let dates = self.validate(check_in, check_out)?;

        let room_type = RoomTypeRepository::new(self.db)
            .find_by_id(room_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

        let excluded = BookingRepository::new(self.db)
            .find_overlapping_room_ids(dates.check_in, dates.check_out)
            .await?;
        let (rooms, total) = RoomRepository::new(self.db)
            .find_by_type_excluding(room_type_id, excluded, page)
            .await?;

        Ok(PaginatedAvailableRooms {
            room_type,
            rooms,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(total),
        })
    }

    fn validate(
        &self,
        check_in: Option<&str>,
        check_out: Option<&str>,
    ) -> Result<StayDates, AppError> {
        let dates = StayDates::parse(check_in, check_out)?;
        dates.ensure_not_past(Utc::now())?;

        Ok(dates)
    }
}
