use super::*;

/// Tests writing only the availability column.
///
/// Expected: availability changed, number and amenities untouched
#[tokio::test]
async fn updates_only_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::room::RoomFactory::new(db, room_type.id)
        .amenities(&["WiFi", "Mini Bar"])
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    repo.set_availability(room.id, RoomAvailability::Occupied)
        .await?;

    let updated = repo.find_by_id(room.id).await?.unwrap();
    assert_eq!(updated.availability, RoomAvailability::Occupied);
    assert_eq!(updated.room_number, room.room_number);
    assert_eq!(updated.amenities, vec!["WiFi", "Mini Bar"]);

    Ok(())
}
