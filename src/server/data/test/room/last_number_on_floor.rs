use super::*;

/// Tests that the highest number on the requested floor is returned.
///
/// Expected: Ok(Some(305)) for floor 3, Ok(None) for an empty floor
#[tokio::test]
async fn returns_highest_on_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    for (floor, number) in [(3, 301), (3, 305), (3, 302), (4, 401)] {
        factory::room::RoomFactory::new(db, room_type.id)
            .floor(floor)
            .room_number(number)
            .build()
            .await?;
    }

    let repo = RoomRepository::new(db);
    assert_eq!(repo.last_number_on_floor(3).await?, Some(305));
    assert_eq!(repo.last_number_on_floor(7).await?, None);

    Ok(())
}
