use super::*;

/// Tests that max persons is derived from the capacity fields.
///
/// Expected: Ok with max_persons = 3 and image URLs preserved
#[tokio::test]
async fn derives_max_persons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = RoomTypeRepository::new(db)
        .create(CreateRoomTypeParams {
            name: "Family".to_string(),
            price_per_night: 15_000,
            description: String::new(),
            max_adults: 2,
            max_children: 1,
            image_urls: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            is_active: true,
        })
        .await?;

    assert_eq!(room_type.max_persons, 3);
    assert_eq!(room_type.image_urls, vec!["a.jpg", "b.jpg"]);

    Ok(())
}
