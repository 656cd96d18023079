use entity::user::{AccountStatus, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub roles: Vec<Role>,
    pub account_status: AccountStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Guest self-registration.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterGuestDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Staff registration redeeming an invitation token.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StaffRegisterDto {
    pub email: String,
    pub token: String,
    /// Must equal the invited role (`ADMIN` or `RECEPTIONIST`).
    pub role: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAccountStatusDto {
    pub status: AccountStatus,
}
