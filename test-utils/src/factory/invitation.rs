//! Invitation factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::invitation::InviteRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    invite_role: InviteRole,
    token: String,
    is_used: bool,
    expires_at: DateTime<Utc>,
}

impl<'a> InvitationFactory<'a> {
    /// Defaults: RECEPTIONIST, unused, expiring in seven days, token `"token{id}"`.
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            email: email.into(),
            invite_role: InviteRole::Receptionist,
            token: format!("token{:060}", id),
            is_used: false,
            expires_at: Utc::now() + Duration::days(7),
        }
    }

    pub fn invite_role(mut self, invite_role: InviteRole) -> Self {
        self.invite_role = invite_role;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn is_used(mut self, is_used: bool) -> Self {
        self.is_used = is_used;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::invitation::Model, DbErr> {
        let now = Utc::now();
        entity::invitation::ActiveModel {
            email: ActiveValue::Set(self.email),
            invite_role: ActiveValue::Set(self.invite_role),
            token: ActiveValue::Set(self.token),
            is_used: ActiveValue::Set(self.is_used),
            expires_at: ActiveValue::Set(self.expires_at),
            used_at: ActiveValue::Set(self.is_used.then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_invitation(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::invitation::Model, DbErr> {
    InvitationFactory::new(db, email).build().await
}
