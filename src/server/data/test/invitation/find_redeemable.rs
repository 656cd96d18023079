use super::*;

/// Tests lookup of an unused, unexpired invitation by token.
///
/// Expected: Ok(Some) for the fresh token
#[tokio::test]
async fn finds_fresh_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = factory::create_invitation(db, "staff@hoterra.test").await?;

    let result = InvitationRepository::new(db)
        .find_redeemable(&invitation.token, Utc::now())
        .await?;

    assert_eq!(result.map(|i| i.id), Some(invitation.id));

    Ok(())
}

/// Tests that used and expired invitations are not redeemable.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn skips_used_and_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let used = factory::invitation::InvitationFactory::new(db, "a@hoterra.test")
        .is_used(true)
        .build()
        .await?;
    let expired = factory::invitation::InvitationFactory::new(db, "b@hoterra.test")
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let repo = InvitationRepository::new(db);
    assert!(repo.find_redeemable(&used.token, Utc::now()).await?.is_none());
    assert!(repo
        .find_redeemable(&expired.token, Utc::now())
        .await?
        .is_none());

    Ok(())
}
