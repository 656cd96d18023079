use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInvitationDto {
    pub email: String,
    /// `ADMIN` or `RECEPTIONIST`.
    #[serde(alias = "inviterole")]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvitationCreatedDto {
    pub message: String,
    pub registration_url: String,
}
