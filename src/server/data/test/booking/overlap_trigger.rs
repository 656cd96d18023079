use super::*;
use migration::{Migrator, MigratorTrait};
use test_utils::context::TestContext;

/// Tests the storage-level guard against overlapping active bookings.
///
/// Runs the real migrations so the trigger exists, then inserts directly, bypassing the
/// service-level conflict check.
///
/// Expected: Err carrying the trigger message for the overlapping insert
#[tokio::test]
async fn rejects_overlapping_active_insert() -> Result<(), DbErr> {
    let mut test = TestContext::new();
    let db = test.database().await.unwrap();
    Migrator::up(db, None).await?;

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 5), day(2025, 1, 10))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let result = factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 8), day(2025, 1, 12))
        .build()
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains(migration::BOOKING_OVERLAP_MESSAGE));

    Ok(())
}

/// Tests that the trigger lets adjacent and inactive bookings through.
///
/// Expected: Ok for a stay starting on the previous check-out day and for a cancelled overlap
#[tokio::test]
async fn allows_adjacent_and_inactive_inserts() -> Result<(), DbErr> {
    let mut test = TestContext::new();
    let db = test.database().await.unwrap();
    Migrator::up(db, None).await?;

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 5), day(2025, 1, 10))
        .build()
        .await?;

    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 10), day(2025, 1, 15))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 1, 6), day(2025, 1, 8))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    Ok(())
}
