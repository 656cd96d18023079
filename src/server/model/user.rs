//! User domain models and parameters.

use entity::user::{AccountStatus, Role};

use crate::model::user::{PaginatedUsersDto, UserDto};

/// An account with its role set decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub roles: Vec<Role>,
    pub account_status: AccountStatus,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            roles: Role::decode_set(&entity.roles),
            account_status: entity.account_status,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// ADMIN or RECEPTIONIST.
    pub fn is_staff(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Receptionist)
    }

    /// True when GUEST is the only role held, the one case where an invitation may upgrade the
    /// account in place.
    pub fn is_guest_only(&self) -> bool {
        !self.roles.is_empty() && self.roles.iter().all(|r| *r == Role::Guest)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            roles: self.roles,
            account_status: self.account_status,
        }
    }
}

/// Fields for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub roles: Vec<Role>,
    pub account_status: AccountStatus,
}

/// Replaces the profile, credentials and roles of an existing account.
#[derive(Debug, Clone)]
pub struct UpgradeUserParams {
    pub id: i32,
    pub name: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub roles: Vec<Role>,
    pub account_status: AccountStatus,
}

#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
