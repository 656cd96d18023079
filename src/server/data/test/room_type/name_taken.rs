use super::*;

/// Tests that names compare case-insensitively and ignore spaces and hyphens.
///
/// Expected: "double-room" collides with "Double Room" unless that row is excluded
#[tokio::test]
async fn compares_normalized_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::room_type::RoomTypeFactory::new(db)
        .name("Double Room")
        .build()
        .await?;

    let repo = RoomTypeRepository::new(db);
    assert!(repo.name_taken("double-room", None).await?);
    assert!(!repo.name_taken("double-room", Some(existing.id)).await?);
    assert!(!repo.name_taken("Single Room", None).await?);

    Ok(())
}
