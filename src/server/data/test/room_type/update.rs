use super::*;

/// Tests a partial update re-deriving max persons from the stored adult count.
///
/// Expected: Ok(Some) with children 3, adults unchanged, max_persons 5
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::room_type::RoomTypeFactory::new(db)
        .capacity(2, 0)
        .build()
        .await?;

    let updated = RoomTypeRepository::new(db)
        .update(UpdateRoomTypeParams {
            id: room_type.id,
            max_children: Some(3),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.max_adults, 2);
    assert_eq!(updated.max_children, 3);
    assert_eq!(updated.max_persons, 5);
    assert_eq!(updated.name, room_type.name);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomTypeRepository::new(db)
        .update(UpdateRoomTypeParams {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
