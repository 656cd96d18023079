use super::*;

/// Tests redeeming a receptionist invitation for a new email.
///
/// Expected: Ok with a PENDING receptionist, second redemption Err(InvalidOrExpiredToken)
#[tokio::test]
async fn token_redeemable_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();
    let service = InvitationService::new(db, &sender, APP_URL);

    let invitation = factory::create_invitation(db, "desk@hoterra.test").await?;

    let user = service
        .consume(redeem("desk@hoterra.test", &invitation.token, "RECEPTIONIST"))
        .await?;
    assert_eq!(user.roles, vec![Role::Receptionist]);
    assert_eq!(user.account_status, AccountStatus::Pending);
    assert_eq!(user.name, "New Staff");

    let stored = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_used);
    assert!(stored.used_at.is_some());

    let result = service
        .consume(redeem("desk@hoterra.test", &invitation.token, "RECEPTIONIST"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InvitationErr(InvitationError::InvalidOrExpiredToken))
    ));

    Ok(())
}

/// Tests upgrading a guest-only account to admin.
///
/// Expected: same account id, roles [ADMIN], ACTIVE
#[tokio::test]
async fn upgrades_guest_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();

    let guest = factory::create_guest(db).await?;
    let invitation = factory::invitation::InvitationFactory::new(db, guest.email.clone())
        .invite_role(InviteRole::Admin)
        .build()
        .await?;

    let user = InvitationService::new(db, &sender, APP_URL)
        .consume(redeem(&guest.email, &invitation.token, "ADMIN"))
        .await?;

    assert_eq!(user.id, guest.id);
    assert_eq!(user.roles, vec![Role::Admin]);
    assert_eq!(user.account_status, AccountStatus::Active);
    assert_eq!(entity::prelude::User::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that accounts holding a staff role cannot redeem an invitation.
///
/// Expected: Err(AlreadyRegisteredHigherRole), invitation left unused
#[tokio::test]
async fn rejects_existing_staff_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();

    let receptionist = factory::create_receptionist(db).await?;
    let invitation = factory::invitation::InvitationFactory::new(db, receptionist.email.clone())
        .invite_role(InviteRole::Admin)
        .build()
        .await?;

    let result = InvitationService::new(db, &sender, APP_URL)
        .consume(redeem(&receptionist.email, &invitation.token, "ADMIN"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InvitationErr(
            InvitationError::AlreadyRegisteredHigherRole
        ))
    ));
    let stored = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_used);

    Ok(())
}

/// Tests the email and role checks against the invitation.
///
/// Expected: Err(EmailMismatch), Err(InvalidRole) for a different or unknown role
#[tokio::test]
async fn rejects_mismatched_email_or_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();
    let service = InvitationService::new(db, &sender, APP_URL);

    let invitation = factory::create_invitation(db, "desk@hoterra.test").await?;

    let result = service
        .consume(redeem("other@hoterra.test", &invitation.token, "RECEPTIONIST"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InvitationErr(InvitationError::EmailMismatch))
    ));

    for role in ["ADMIN", "MANAGER"] {
        let result = service
            .consume(redeem("desk@hoterra.test", &invitation.token, role))
            .await;
        assert!(matches!(
            result,
            Err(AppError::InvitationErr(InvitationError::InvalidRole(_)))
        ));
    }

    Ok(())
}
