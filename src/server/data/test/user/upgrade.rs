use super::*;

/// Tests upgrading a guest account in place.
///
/// Expected: same id and email, roles replaced, new status and profile
#[tokio::test]
async fn replaces_roles_and_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let upgraded = UserRepository::new(db)
        .upgrade(UpgradeUserParams {
            id: guest.id,
            name: "Front Desk".to_string(),
            password_hash: "new-hash".to_string(),
            phone: None,
            roles: vec![Role::Receptionist],
            account_status: AccountStatus::Pending,
        })
        .await?;

    assert_eq!(upgraded.id, guest.id);
    assert_eq!(upgraded.email, guest.email);
    assert_eq!(upgraded.name, "Front Desk");
    assert_eq!(upgraded.roles, vec![Role::Receptionist]);
    assert_eq!(upgraded.account_status, AccountStatus::Pending);

    let (_, hash) = UserRepository::new(db)
        .find_credentials(&guest.email)
        .await?
        .unwrap();
    assert_eq!(hash, "new-hash");

    Ok(())
}
