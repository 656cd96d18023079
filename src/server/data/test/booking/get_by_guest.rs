use super::*;

/// Tests that a guest's bookings are filtered and ordered by check-in.
///
/// Expected: Ok with the guest's two bookings, earliest check-in first
#[tokio::test]
async fn returns_own_bookings_by_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let other = factory::create_guest(db).await?;
    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let later = factory::booking::BookingFactory::new(db, room.id)
        .guest(&guest)
        .dates(day(2025, 6, 10), day(2025, 6, 12))
        .build()
        .await?;
    let earlier = factory::booking::BookingFactory::new(db, room.id)
        .guest(&guest)
        .dates(day(2025, 6, 1), day(2025, 6, 3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .guest(&other)
        .dates(day(2025, 6, 4), day(2025, 6, 6))
        .build()
        .await?;

    let bookings = BookingRepository::new(db).get_by_guest(guest.id).await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert!(bookings.iter().all(|b| b.guest.user_id() == Some(guest.id)));

    Ok(())
}
