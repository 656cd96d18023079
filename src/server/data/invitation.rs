use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::invitation::CreateInvitationParams;

pub struct InvitationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateInvitationParams,
    ) -> Result<entity::invitation::Model, DbErr> {
        entity::invitation::ActiveModel {
            email: ActiveValue::Set(params.email),
            invite_role: ActiveValue::Set(params.invite_role),
            token: ActiveValue::Set(params.token),
            is_used: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(params.expires_at),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every unused invitation for an email.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of invitations removed
    pub async fn delete_unused_for_email(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Invitation::delete_many()
            .filter(entity::invitation::Column::Email.eq(email))
            .filter(entity::invitation::Column::IsUsed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds an unused invitation by token that has not expired at `now`.
    pub async fn find_redeemable(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::invitation::Model>, DbErr> {
        entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::Token.eq(token))
            .filter(entity::invitation::Column::IsUsed.eq(false))
            .filter(entity::invitation::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Marks an invitation used, guarded on it still being unused.
    ///
    /// # Returns
    /// - `Ok(1)` - This call consumed the invitation
    /// - `Ok(0)` - It was already used (or does not exist)
    pub async fn mark_used(&self, id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Invitation::update_many()
            .set(entity::invitation::ActiveModel {
                is_used: ActiveValue::Set(true),
                used_at: ActiveValue::Set(Some(now)),
                ..Default::default()
            })
            .filter(entity::invitation::Column::Id.eq(id))
            .filter(entity::invitation::Column::IsUsed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
