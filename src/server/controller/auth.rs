use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterGuestDto, StaffRegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{
            auth::{AuthService, RegisterGuestParams},
            invitation::InvitationService,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a guest account.
///
/// Creates an ACTIVE account holding the GUEST role. The caller is not logged in.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Missing name or email, password too short
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterGuestDto,
    responses(
        (status = 201, description = "Guest registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register_guest(RegisterGuestParams {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            phone: payload.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Stores the user id in the session on success.
///
/// # Returns
/// - `200 OK` - The logged-in account
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in account.
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Account not ACTIVE
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a staff account by redeeming an invitation.
///
/// Creates the account, or upgrades a guest-only account with the invited email in place.
/// Admins start ACTIVE, receptionists PENDING until an admin activates them.
///
/// # Returns
/// - `201 Created` - The staff account
/// - `400 Bad Request` - Invalid or expired token, email or role mismatch, weak password
/// - `409 Conflict` - Email already holds a staff role
#[utoipa::path(
    post,
    path = "/api/auth/staff/register",
    tag = AUTH_TAG,
    request_body = StaffRegisterDto,
    responses(
        (status = 201, description = "Staff account registered", body = UserDto),
        (status = 400, description = "Invitation cannot be redeemed", body = ErrorDto),
        (status = 409, description = "Email already registered with a higher role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn staff_register(
    State(state): State<AppState>,
    Json(payload): Json<StaffRegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = InvitationService::new(&state.db, &state.email_sender, &state.app_url)
        .consume(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
