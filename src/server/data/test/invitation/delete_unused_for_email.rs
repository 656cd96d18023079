use super::*;
use sea_orm::EntityTrait;

/// Tests that re-inviting clears only unused invitations for the same email.
///
/// Expected: Ok(1), the used invitation and other emails untouched
#[tokio::test]
async fn removes_only_unused_for_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_invitation(db, "staff@hoterra.test").await?;
    let used = factory::invitation::InvitationFactory::new(db, "staff@hoterra.test")
        .is_used(true)
        .build()
        .await?;
    let other = factory::create_invitation(db, "other@hoterra.test").await?;

    let removed = InvitationRepository::new(db)
        .delete_unused_for_email("staff@hoterra.test")
        .await?;
    assert_eq!(removed, 1);

    let remaining: Vec<i32> = entity::prelude::Invitation::find()
        .all(db)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert!(!remaining.contains(&pending.id));
    assert!(remaining.contains(&used.id));
    assert!(remaining.contains(&other.id));

    Ok(())
}
