use super::*;

/// Tests that guests see only their own bookings while staff see all.
///
/// Expected: guest list of 1, staff list of 2
#[tokio::test]
async fn scopes_list_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let staff = User::from_entity(factory::create_receptionist(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let own = factory::booking::BookingFactory::new(db, room.id)
        .guest(&guest)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let service = BookingService::new(db);

    let guest_view = service.list(&User::from_entity(guest)).await?;
    assert_eq!(guest_view.len(), 1);
    assert_eq!(guest_view[0].id, own.id);

    assert_eq!(service.list(&staff).await?.len(), 2);

    Ok(())
}

/// Tests that another guest's booking is reported as missing.
///
/// Expected: Err(NotFound) for the stranger, Ok for the owner and staff
#[tokio::test]
async fn hides_other_guests_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guest(db).await?;
    let stranger = User::from_entity(factory::create_guest(db).await?);
    let staff = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::booking::BookingFactory::new(db, room.id)
        .guest(&owner)
        .build()
        .await?;

    let service = BookingService::new(db);

    let result = service.get(&stranger, booking.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    assert_eq!(
        service.get(&User::from_entity(owner), booking.id).await?.id,
        booking.id
    );
    assert_eq!(service.get(&staff, booking.id).await?.id, booking.id);

    Ok(())
}
