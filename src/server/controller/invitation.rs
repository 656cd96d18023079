use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        invitation::{CreateInvitationDto, InvitationCreatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::invitation::InvitationService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitations";

/// Invite a staff member.
///
/// Replaces any unused invitation for the email, stores a new token valid for seven days and
/// emails the registration link. A failed email does not fail the request; the link is also
/// returned in the response.
///
/// # Access Control
/// - `Admin` - Only admins can invite staff
///
/// # Returns
/// - `201 Created` - Invitation issued
/// - `400 Bad Request` - Missing email or invalid role
/// - `409 Conflict` - Email already belongs to a staff account
#[utoipa::path(
    post,
    path = "/api/invite/staff",
    tag = INVITATION_TAG,
    request_body = CreateInvitationDto,
    responses(
        (status = 201, description = "Invitation issued", body = InvitationCreatedDto),
        (status = 400, description = "Invalid invitation request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 409, description = "Email already registered as staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_staff(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let issued = InvitationService::new(&state.db, &state.email_sender, &state.app_url)
        .create(&admin, &payload.email, &payload.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InvitationCreatedDto {
            message: format!("Invitation sent to {}", issued.invitation.email),
            registration_url: issued.registration_url,
        }),
    ))
}
