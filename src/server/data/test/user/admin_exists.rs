use super::*;

/// Tests detecting when an admin account exists.
///
/// Expected: Ok(false) with only guests and receptionists, Ok(true) after adding an admin
#[tokio::test]
async fn detects_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::create_guest(db).await?;
    factory::create_receptionist(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
