use super::*;

/// Tests that a guest books under their own profile whatever contact they submit.
///
/// Expected: Ok with the caller's name and id, 3 nights at 100 = 300, PENDING, room untouched
#[tokio::test]
async fn guest_books_with_profile_contact() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::UserFactory::new(db)
        .name("Grace Hopper")
        .build()
        .await?;
    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let booking = BookingService::new(db)
        .create(
            &User::from_entity(guest.clone()),
            BookingRequest {
                guest_name: Some("Someone Else".to_string()),
                guest_email: Some("else@hoterra.test".to_string()),
                ..request(room.id, 5, 3)
            },
        )
        .await?;

    assert_eq!(booking.guest.user_id(), Some(guest.id));
    assert_eq!(booking.guest.contact().name, "Grace Hopper");
    assert_eq!(booking.guest.contact().email.as_deref(), Some(guest.email.as_str()));
    assert_eq!(booking.total_price, 300);
    assert_eq!(booking.status, BookingStatus::Pending);

    let room = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();
    assert_eq!(room.availability, RoomAvailability::Available);

    Ok(())
}

/// Tests that staff create walk-in bookings from the submitted contact.
///
/// Expected: Ok with no guest id and the supplied phone
#[tokio::test]
async fn staff_books_walk_in_guest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let receptionist = factory::create_receptionist(db).await?;
    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let booking = BookingService::new(db)
        .create(
            &User::from_entity(receptionist),
            BookingRequest {
                guest_name: Some(" Ada ".to_string()),
                guest_phone: Some("0700000000".to_string()),
                ..request(room.id, 2, 1)
            },
        )
        .await?;

    assert!(matches!(booking.guest, BookingGuest::WalkIn(_)));
    assert_eq!(booking.guest.contact().name, "Ada");
    assert_eq!(booking.guest.contact().phone.as_deref(), Some("0700000000"));
    assert_eq!(booking.guest.contact().email, None);

    Ok(())
}

/// Tests walk-in contact validation.
///
/// Expected: Err(MissingGuestName) without a name, Err(MissingWalkInContact) without email or phone
#[tokio::test]
async fn rejects_incomplete_walk_in_contact() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let service = BookingService::new(db);

    let result = service
        .create(
            &admin,
            BookingRequest {
                guest_email: Some("ada@hoterra.test".to_string()),
                ..request(room.id, 2, 1)
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::MissingGuestName))
    ));

    let result = service
        .create(
            &admin,
            BookingRequest {
                guest_name: Some("Ada".to_string()),
                guest_email: Some("  ".to_string()),
                ..request(room.id, 2, 1)
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::MissingWalkInContact))
    ));

    Ok(())
}

/// Tests that a second overlapping booking for the same room is refused.
///
/// Expected: Err(RoomUnavailable), only the first booking stored
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = User::from_entity(factory::create_guest(db).await?);
    let other = User::from_entity(factory::create_guest(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let service = BookingService::new(db);

    service.create(&guest, request(room.id, 10, 5)).await?;
    let result = service.create(&other, request(room.id, 13, 4)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::RoomUnavailable))
    ));
    assert_eq!(BookingRepository::new(db).get_all().await?.len(), 1);

    // Starting on the previous check-out day does not overlap.
    service.create(&other, request(room.id, 15, 2)).await?;

    Ok(())
}

/// Tests that a cancelled booking no longer blocks its dates.
///
/// Expected: Ok for a booking over a cancelled one
#[tokio::test]
async fn ignores_cancelled_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = User::from_entity(factory::create_guest(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let service = BookingService::new(db);

    let first = service.create(&guest, request(room.id, 3, 2)).await?;
    service
        .update_status(&guest, first.id, "CANCELLED")
        .await?;

    service.create(&guest, request(room.id, 3, 2)).await?;

    Ok(())
}

/// Tests date validation and the missing room case.
///
/// Expected: Err(InvalidRange), Err(InvalidDate), Err(RoomNotFound)
#[tokio::test]
async fn validates_dates_and_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = User::from_entity(factory::create_guest(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let service = BookingService::new(db);

    let result = service.create(&guest, request(room.id, 4, 0)).await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidRange))
    ));

    let result = service
        .create(
            &guest,
            BookingRequest {
                check_in: "next tuesday".to_string(),
                ..request(room.id, 4, 1)
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidDate(_)))
    ));

    let result = service.create(&guest, request(room.id + 100, 4, 1)).await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::RoomNotFound(_)))
    ));

    Ok(())
}
