//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles account
//! creation, role upgrades from invitations, account status changes and admin lookups, with
//! conversion between entity models and domain models at the infrastructure boundary.

use entity::user::{AccountStatus, Role};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    user::{CreateUserParams, UpgradeUserParams, User},
};

/// Repository providing database operations for user accounts.
///
/// Generic over the connection so it can run inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            phone: ActiveValue::Set(params.phone),
            roles: ActiveValue::Set(Role::encode_set(&params.roles)),
            account_status: ActiveValue::Set(params.account_status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns the stored credential hash for an email, alongside the account.
    ///
    /// Used only by login; the hash never leaves the auth service.
    pub async fn find_credentials(&self, email: &str) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Overwrites profile, credentials, roles and status of an existing account.
    pub async fn upgrade(&self, params: UpgradeUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.password_hash = ActiveValue::Set(params.password_hash);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.roles = ActiveValue::Set(Role::encode_set(&params.roles));
        active_model.account_status = ActiveValue::Set(params.account_status);

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Sets the account status.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated account
    /// - `Ok(None)` - No account with this id
    pub async fn set_account_status(
        &self,
        id: i32,
        status: AccountStatus,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.account_status = ActiveValue::Set(status);
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Checks whether any account holds the ADMIN role.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Roles.contains(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of accounts ordered by name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - The page and the total number of accounts
    pub async fn get_all_paginated(&self, page: PageRequest) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((users, total))
    }
}
