use super::*;

/// Tests that marking used only succeeds once.
///
/// Expected: Ok(1) on the first call, Ok(0) on the second
#[tokio::test]
async fn succeeds_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = factory::create_invitation(db, "staff@hoterra.test").await?;
    let repo = InvitationRepository::new(db);

    assert_eq!(repo.mark_used(invitation.id, Utc::now()).await?, 1);
    assert_eq!(repo.mark_used(invitation.id, Utc::now()).await?, 0);

    let found = repo.find_redeemable(&invitation.token, Utc::now()).await?;
    assert!(found.is_none());

    Ok(())
}
