use entity::user::AccountStatus;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// ADMIN role.
    Admin,
    /// ADMIN or RECEPTIONIST role.
    Staff,
}

/// Resolves the caller from the session and enforces permissions.
///
/// Every guarded request requires a logged-in user whose account is ACTIVE; the listed
/// permissions must all hold on top of that.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted account
    /// - `Err(AuthError::AccountNotActive)` - Account PENDING or BLOCKED
    /// - `Err(AuthError::AccessDenied)` - A permission does not hold
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.account_status != AccountStatus::Active {
            return Err(AuthError::AccountNotActive(user_id, user.account_status).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !user.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "staff role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
