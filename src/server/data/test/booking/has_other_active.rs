use super::*;

/// Tests that the booking being transitioned is not counted.
///
/// Expected: Ok(false) when the excluded booking is the only active one
#[tokio::test]
async fn excludes_given_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::create_booking(db, room.id).await?;

    let result = BookingRepository::new(db)
        .has_other_active(room.id, booking.id)
        .await?;

    assert!(!result);

    Ok(())
}

/// Tests that another active booking for the same room is found regardless of its dates.
///
/// Expected: Ok(true) with a later CONFIRMED booking, Ok(false) once only cancelled ones remain
#[tokio::test]
async fn finds_other_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let first = factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 2, 1), day(2025, 2, 3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .dates(day(2025, 3, 1), day(2025, 3, 3))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    assert!(repo.has_other_active(room.id, first.id).await?);

    let (_, other_room) = factory::helpers::create_room_with_type(db).await?;
    factory::booking::BookingFactory::new(db, other_room.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;
    assert!(!repo.has_other_active(other_room.id, first.id).await?);

    Ok(())
}
