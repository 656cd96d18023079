use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::user::AccountStatus;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password does not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but is PENDING or BLOCKED.
    #[error("User {0} has account status {1:?}")]
    AccountNotActive(i32, AccountStatus),

    /// Authenticated user lacks the required role.
    ///
    /// The message is logged; the client receives a generic 403 body.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized
/// - `AccountNotActive` → 403 Forbidden
/// - `AccessDenied` → 403 Forbidden, details logged at debug level
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Authentication required".to_string(),
                )
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::AccountNotActive(_, status) => {
                let message = match status {
                    AccountStatus::Pending => "Your account is awaiting approval",
                    _ => "Your account has been blocked",
                };
                error_response(StatusCode::FORBIDDEN, message.to_string())
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action".to_string(),
                )
            }
        }
    }
}
