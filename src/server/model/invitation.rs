//! Staff invitation models and parameters.

use chrono::{DateTime, Utc};
use entity::invitation::InviteRole;

#[derive(Debug, Clone)]
pub struct CreateInvitationParams {
    pub email: String,
    pub invite_role: InviteRole,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Input for redeeming an invitation at staff registration.
#[derive(Debug, Clone)]
pub struct ConsumeInvitationParams {
    pub email: String,
    pub token: String,
    /// Raw role name; must parse as an invite role and match the invitation.
    pub role: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
}

impl From<crate::model::user::StaffRegisterDto> for ConsumeInvitationParams {
    fn from(dto: crate::model::user::StaffRegisterDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            token: dto.token.trim().to_string(),
            role: dto.role.trim().to_string(),
            name: dto.name.trim().to_string(),
            password: dto.password,
            phone: dto.phone,
        }
    }
}

/// A freshly issued invitation and the link sent to the invitee.
#[derive(Debug, Clone)]
pub struct IssuedInvitation {
    pub invitation: entity::invitation::Model,
    pub registration_url: String,
}
