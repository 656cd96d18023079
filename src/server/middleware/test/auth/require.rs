use super::*;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted account is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that any active account passes when no permission is required.
///
/// Expected: Ok(User) for a guest
#[tokio::test]
async fn grants_authenticated_guest_without_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guest = factory::user::create_guest(db).await?;
    AuthSession::new(session).set_user_id(guest.id).await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, guest.id);
    assert_eq!(user.roles, vec![Role::Guest]);

    Ok(())
}

/// Tests that PENDING and BLOCKED accounts are refused even without permissions.
///
/// Expected: Err(AuthError::AccountNotActive) for both
#[tokio::test]
async fn rejects_inactive_accounts() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for status in [AccountStatus::Pending, AccountStatus::Blocked] {
        let user = factory::user::UserFactory::new(db)
            .roles(&[Role::Receptionist])
            .account_status(status)
            .build()
            .await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session).require(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccountNotActive(id, s))) if id == user.id && s == status
        ));
    }

    Ok(())
}

/// Tests that only ADMIN accounts pass the admin permission.
///
/// Expected: Ok for admin, Err(AuthError::AccessDenied) for receptionist
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let receptionist = factory::user::create_receptionist(db).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;
    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;
    assert!(user.is_admin());

    AuthSession::new(session).set_user_id(receptionist.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == receptionist.id
    ));

    Ok(())
}

/// Tests that the staff permission admits admins and receptionists but not guests.
///
/// Expected: Ok for ADMIN and RECEPTIONIST, Err(AuthError::AccessDenied) for GUEST
#[tokio::test]
async fn staff_permission_admits_admin_and_receptionist() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let receptionist = factory::user::create_receptionist(db).await?;
    let guest = factory::user::create_guest(db).await?;

    for staff in [&admin, &receptionist] {
        AuthSession::new(session).set_user_id(staff.id).await?;
        let user = AuthGuard::new(db, session)
            .require(&[Permission::Staff])
            .await?;
        assert!(user.is_staff());
    }

    AuthSession::new(session).set_user_id(guest.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
