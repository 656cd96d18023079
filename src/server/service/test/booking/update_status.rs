use super::*;

/// Tests the room availability projection along the happy path.
///
/// Expected: BOOKED after confirm, OCCUPIED after check-in, AVAILABLE after check-out
#[tokio::test]
async fn projects_room_availability() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = User::from_entity(factory::create_receptionist(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::create_booking(db, room.id).await?;

    let service = BookingService::new(db);
    let room_repo = RoomRepository::new(db);

    for (status, availability) in [
        ("CONFIRMED", RoomAvailability::Booked),
        ("CHECKED_IN", RoomAvailability::Occupied),
        ("CHECKED_OUT", RoomAvailability::Available),
    ] {
        let updated = service.update_status(&staff, booking.id, status).await?;
        assert_eq!(updated.status.as_str(), status);

        let room = room_repo.find_by_id(room.id).await?.unwrap();
        assert_eq!(room.availability, availability, "after {status}");
    }

    Ok(())
}

/// Tests that cancelling keeps the room BOOKED while another active booking references it.
///
/// Expected: BOOKED after the first cancel, AVAILABLE after the last
#[tokio::test]
async fn recomputes_availability_from_other_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let now = chrono::Utc::now();
    let first = factory::booking::BookingFactory::new(db, room.id)
        .dates(now + chrono::Duration::days(1), now + chrono::Duration::days(3))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let second = factory::booking::BookingFactory::new(db, room.id)
        .dates(now + chrono::Duration::days(10), now + chrono::Duration::days(12))
        .build()
        .await?;

    let service = BookingService::new(db);
    let room_repo = RoomRepository::new(db);

    service.update_status(&staff, first.id, "CANCELLED").await?;
    let current = room_repo.find_by_id(room.id).await?.unwrap();
    assert_eq!(current.availability, RoomAvailability::Booked);

    service.update_status(&staff, second.id, "CANCELLED").await?;
    let current = room_repo.find_by_id(room.id).await?.unwrap();
    assert_eq!(current.availability, RoomAvailability::Available);

    Ok(())
}

/// Tests that transitions outside the lifecycle table change nothing.
///
/// Expected: Err(IllegalTransition) naming both states, booking and room unchanged
#[tokio::test]
async fn illegal_transition_does_not_mutate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::create_booking(db, room.id).await?;

    let result = BookingService::new(db)
        .update_status(&staff, booking.id, "CHECKED_OUT")
        .await;

    match result {
        Err(AppError::BookingErr(err)) => {
            assert_eq!(
                err,
                BookingError::IllegalTransition {
                    from: BookingStatus::Pending,
                    to: BookingStatus::CheckedOut,
                }
            );
            assert_eq!(
                err.to_string(),
                "Cannot change booking status from PENDING to CHECKED_OUT"
            );
        }
        other => panic!("expected illegal transition, got {other:?}"),
    }

    let stored = BookingRepository::new(db).find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    let room = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();
    assert_eq!(room.availability, RoomAvailability::Available);

    Ok(())
}

/// Tests that terminal states accept no further transition.
///
/// Expected: Err(IllegalTransition) when re-opening a cancelled booking
#[tokio::test]
async fn terminal_states_are_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::booking::BookingFactory::new(db, room.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let result = BookingService::new(db)
        .update_status(&staff, booking.id, "PENDING")
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::IllegalTransition { .. }))
    ));

    Ok(())
}

/// Tests unknown status names and missing bookings.
///
/// Expected: Err(InvalidStatus), Err(NotFound)
#[tokio::test]
async fn rejects_unknown_status_and_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = User::from_entity(factory::create_admin(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::create_booking(db, room.id).await?;
    let service = BookingService::new(db);

    let result = service.update_status(&staff, booking.id, "COMPLETED").await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidStatus(_)))
    ));

    let result = service.update_status(&staff, booking.id + 1, "CONFIRMED").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the guest permissions on status changes.
///
/// Expected: guest may cancel their own booking only; confirming or touching another guest's
/// booking is Err(AccessDenied)
#[tokio::test]
async fn guest_may_only_cancel_own_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guest(db).await?;
    let stranger = User::from_entity(factory::create_guest(db).await?);
    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let booking = factory::booking::BookingFactory::new(db, room.id)
        .guest(&owner)
        .build()
        .await?;

    let owner = User::from_entity(owner);
    let service = BookingService::new(db);

    let result = service.update_status(&owner, booking.id, "CONFIRMED").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service.update_status(&stranger, booking.id, "CANCELLED").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let cancelled = service.update_status(&owner, booking.id, "CANCELLED").await?;
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    Ok(())
}
