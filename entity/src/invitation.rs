use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::Role;

/// Roles that can be granted through a staff invitation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "RECEPTIONIST")]
    Receptionist,
}

impl InviteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteRole::Admin => "ADMIN",
            InviteRole::Receptionist => "RECEPTIONIST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(InviteRole::Admin),
            "RECEPTIONIST" => Some(InviteRole::Receptionist),
            _ => None,
        }
    }
}

impl From<InviteRole> for Role {
    fn from(role: InviteRole) -> Self {
        match role {
            InviteRole::Admin => Role::Admin,
            InviteRole::Receptionist => Role::Receptionist,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invitation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub invite_role: InviteRole,
    #[sea_orm(unique)]
    pub token: String,
    pub is_used: bool,
    pub expires_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub used_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
