use super::*;

/// Tests the half-open overlap rule around an existing stay.
///
/// A CONFIRMED booking from Jan 5 to Jan 10 blocks a query for Jan 8 to Jan 12, while a query
/// starting on its check-out day does not overlap.
///
/// Expected: room excluded for Jan 8-12, not excluded for Jan 10-15
#[tokio::test]
async fn uses_half_open_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 5), day(2025, 1, 10))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let overlapping = repo
        .find_overlapping_room_ids(day(2025, 1, 8), day(2025, 1, 12))
        .await?;
    assert_eq!(overlapping, vec![room.id]);

    let adjacent = repo
        .find_overlapping_room_ids(day(2025, 1, 10), day(2025, 1, 15))
        .await?;
    assert!(adjacent.is_empty());

    Ok(())
}

/// Tests that only active bookings block a room.
///
/// Expected: CANCELLED and CHECKED_OUT bookings are ignored
#[tokio::test]
async fn ignores_inactive_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    for status in [BookingStatus::Cancelled, BookingStatus::CheckedOut] {
        factory::booking::BookingFactory::new(db, room.id)
            .dates(day(2025, 1, 5), day(2025, 1, 10))
            .status(status)
            .build()
            .await?;
    }

    let result = BookingRepository::new(db)
        .find_overlapping_room_ids(day(2025, 1, 6), day(2025, 1, 7))
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that a room with several overlapping bookings is reported once.
///
/// Expected: Ok with a single room id
#[tokio::test]
async fn returns_distinct_room_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 1), day(2025, 1, 3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 3), day(2025, 1, 6))
        .status(BookingStatus::CheckedIn)
        .build()
        .await?;

    let result = BookingRepository::new(db)
        .find_overlapping_room_ids(day(2025, 1, 2), day(2025, 1, 5))
        .await?;

    assert_eq!(result, vec![room.id]);

    Ok(())
}
