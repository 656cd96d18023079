use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role granted to an account. An account holds a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Receptionist,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Receptionist => "RECEPTIONIST",
            Role::Guest => "GUEST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ADMIN" => Some(Role::Admin),
            "RECEPTIONIST" => Some(Role::Receptionist),
            "GUEST" => Some(Role::Guest),
            _ => None,
        }
    }

    /// Encodes a role set into the comma-separated form stored in `user.roles`.
    pub fn encode_set(roles: &[Role]) -> String {
        roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Decodes the stored role column, skipping unknown entries.
    pub fn decode_set(value: &str) -> Vec<Role> {
        value.split(',').filter_map(Role::parse).collect()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "BLOCKED")]
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(nullable)]
    pub phone: Option<String>,
    /// Comma-separated role names, see [`Role::encode_set`].
    pub roles: String,
    pub account_status: AccountStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
