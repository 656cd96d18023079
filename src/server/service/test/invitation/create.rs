use super::*;

/// Tests issuing an invitation and its registration link.
///
/// Expected: Ok with a 64 character token, RECEPTIONIST role and matching URL
#[tokio::test]
async fn issues_invitation_with_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();
    let caller = admin(db).await;

    let issued = InvitationService::new(db, &sender, APP_URL)
        .create(&caller, " desk@hoterra.test ", "RECEPTIONIST")
        .await?;

    assert_eq!(issued.invitation.email, "desk@hoterra.test");
    assert_eq!(issued.invitation.invite_role, InviteRole::Receptionist);
    assert_eq!(issued.invitation.token.len(), 64);
    assert!(!issued.invitation.is_used);
    assert_eq!(
        issued.registration_url,
        format!(
            "{}/register?role=RECEPTIONIST&token={}",
            APP_URL, issued.invitation.token
        )
    );

    Ok(())
}

/// Tests that inviting the same email again replaces the earlier invitation.
///
/// Expected: only the second token is redeemable
#[tokio::test]
async fn reinvite_invalidates_previous_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();
    let caller = admin(db).await;
    let service = InvitationService::new(db, &sender, APP_URL);

    let first = service
        .create(&caller, "desk@hoterra.test", "RECEPTIONIST")
        .await?;
    let second = service
        .create(&caller, "desk@hoterra.test", "RECEPTIONIST")
        .await?;

    let stored = entity::prelude::Invitation::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    let result = service
        .consume(redeem(
            "desk@hoterra.test",
            &first.invitation.token,
            "RECEPTIONIST",
        ))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InvitationErr(InvitationError::InvalidOrExpiredToken))
    ));

    service
        .consume(redeem(
            "desk@hoterra.test",
            &second.invitation.token,
            "RECEPTIONIST",
        ))
        .await?;

    Ok(())
}

/// Tests role and email validation and the staff account check.
///
/// Expected: Err(InvalidRole) for GUEST, Err(BadRequest) for an empty email,
/// Err(AlreadyRegistered) for a receptionist, Ok for a guest-only account
#[tokio::test]
async fn validates_role_and_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = log_only_sender();
    let caller = admin(db).await;
    let service = InvitationService::new(db, &sender, APP_URL);

    let result = service.create(&caller, "x@hoterra.test", "GUEST").await;
    assert!(matches!(
        result,
        Err(AppError::InvitationErr(InvitationError::InvalidRole(_)))
    ));

    let result = service.create(&caller, "  ", "ADMIN").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let receptionist = factory::create_receptionist(db).await?;
    let result = service.create(&caller, &receptionist.email, "ADMIN").await;
    assert!(matches!(
        result,
        Err(AppError::InvitationErr(InvitationError::AlreadyRegistered))
    ));

    let guest = factory::create_guest(db).await?;
    service.create(&caller, &guest.email, "ADMIN").await?;

    Ok(())
}

/// Tests that a failed email delivery keeps the invitation.
///
/// The sender has an API key but points at a closed local port, so the request fails.
///
/// Expected: Ok with the registration URL, invitation stored
#[tokio::test]
async fn email_failure_does_not_roll_back() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = EmailSender::new(
        reqwest::Client::new(),
        Some("test-key".to_string()),
        "noreply@hoterra.test".to_string(),
    )
    .with_endpoint("http://127.0.0.1:9/v3/smtp/email");
    let caller = admin(db).await;

    let issued = InvitationService::new(db, &sender, APP_URL)
        .create(&caller, "desk@hoterra.test", "ADMIN")
        .await?;

    assert!(issued.registration_url.contains(&issued.invitation.token));
    let stored = entity::prelude::Invitation::find_by_id(issued.invitation.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
