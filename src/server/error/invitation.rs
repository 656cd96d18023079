use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while issuing or redeeming staff invitations.
#[derive(Error, Debug, PartialEq)]
pub enum InvitationError {
    #[error("{0} is not an allowed invite role")]
    InvalidRole(String),

    /// The registration email differs from the invited one.
    #[error("Email does not match the invitation")]
    EmailMismatch,

    /// Token unknown, already used or past its expiry.
    #[error("Invitation is invalid or has expired")]
    InvalidOrExpiredToken,

    /// Inviting an email that already belongs to a staff account.
    #[error("This user already has an account and cannot be invited")]
    AlreadyRegistered,

    /// Redeeming an invitation for an email that already holds a non-guest role.
    #[error("This email is already registered with a higher role")]
    AlreadyRegisteredHigherRole,
}

impl IntoResponse for InvitationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyRegistered | Self::AlreadyRegisteredHigherRole => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
