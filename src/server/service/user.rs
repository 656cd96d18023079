use entity::user::{AccountStatus, Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::DefaultAdminConfig,
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::PageRequest,
        user::{CreateUserParams, PaginatedUsers, User},
    },
    service::password::{hash_password, validate_password},
};

/// Admin-facing account management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(total),
        })
    }

    /// Changes an account's status. Admins cannot change their own status.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::BadRequest)` - Target is the caller
    /// - `Err(AppError::NotFound)` - No such account
    pub async fn set_account_status(
        &self,
        caller: &User,
        user_id: i32,
        status: AccountStatus,
    ) -> Result<User, AppError> {
        if caller.id == user_id {
            return Err(AppError::BadRequest(
                "You cannot change your own account status".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_account_status(user_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(user_id, status = ?status, changed_by = caller.id, "Account status changed");

        Ok(user)
    }

    /// Creates an ACTIVE admin from startup configuration when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin was created
    /// - `Ok(None)` - An admin already exists, or the email is taken by another account
    /// - `Err(AppError::BadRequest)` - Configured password too short
    pub async fn ensure_default_admin(
        &self,
        admin: &DefaultAdminConfig,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(None);
        }
        if user_repo.find_by_email(admin.email.trim()).await?.is_some() {
            tracing::warn!(
                email = %admin.email,
                "Default admin email already belongs to an account; skipping admin bootstrap"
            );
            return Ok(None);
        }
        validate_password(&admin.password)?;

        let user = user_repo
            .create(CreateUserParams {
                name: admin.name.trim().to_string(),
                email: admin.email.trim().to_string(),
                password_hash: hash_password(&admin.password)?,
                phone: None,
                roles: vec![Role::Admin],
                account_status: AccountStatus::Active,
            })
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "Created default admin account");

        Ok(Some(user))
    }
}
