use entity::user::{AccountStatus, Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::password::{hash_password, validate_password, verify_password},
};

/// Input for guest self-registration.
#[derive(Debug, Clone)]
pub struct RegisterGuestParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Service for email/password accounts: guest registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an ACTIVE account holding only the GUEST role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Missing name/email or password too short
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register_guest(&self, params: RegisterGuestParams) -> Result<User, AppError> {
        let name = params.name.trim().to_string();
        let email = params.email.trim().to_string();

        if name.is_empty() || email.is_empty() {
            return Err(AppError::BadRequest(
                "Name and email are required".to_string(),
            ));
        }
        validate_password(&params.password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name,
                email,
                password_hash: hash_password(&params.password)?,
                phone: params.phone.filter(|p| !p.trim().is_empty()),
                roles: vec![Role::Guest],
                account_status: AccountStatus::Active,
            })
            .await?;

        tracing::info!(user_id = user.id, "Guest registered");

        Ok(user)
    }

    /// Verifies email and password.
    ///
    /// Account status is not checked here; the auth guard rejects inactive accounts on every
    /// request, so a PENDING receptionist can log in and see their status.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = user_repo.find_credentials(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
