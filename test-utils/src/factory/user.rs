//! User factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::{AccountStatus, Role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored as the credential hash when a test does not log in.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Builder for user rows.
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .email("admin@hoterra.test")
///     .roles(&[Role::Admin])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    phone: Option<String>,
    roles: Vec<Role>,
    account_status: AccountStatus,
}

impl<'a> UserFactory<'a> {
    /// Defaults: name `"User {id}"`, email `"user{id}@hoterra.test"`, role GUEST, ACTIVE.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@hoterra.test", id),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            phone: Some(format!("07{:08}", id)),
            roles: vec![Role::Guest],
            account_status: AccountStatus::Active,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    pub fn account_status(mut self, account_status: AccountStatus) -> Self {
        self.account_status = account_status;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone: ActiveValue::Set(self.phone),
            roles: ActiveValue::Set(Role::encode_set(&self.roles)),
            account_status: ActiveValue::Set(self.account_status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active guest with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active GUEST account.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).roles(&[Role::Guest]).build().await
}

/// Creates an active ADMIN account.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).roles(&[Role::Admin]).build().await
}

/// Creates an active RECEPTIONIST account.
pub async fn create_receptionist(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .roles(&[Role::Receptionist])
        .build()
        .await
}
