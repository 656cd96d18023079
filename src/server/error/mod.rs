//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod booking;
pub mod config;
pub mod internal;
pub mod invitation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, internal::InternalError,
        invitation::InvitationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors (`AuthError`,
/// `BookingError`, `InvitationError`) handle their own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Availability or booking lifecycle error.
    ///
    /// Delegates to `BookingError::into_response()` (400, 404 or 409).
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Staff invitation workflow error.
    ///
    /// Delegates to `InvitationError::into_response()` (400 or 409).
    #[error(transparent)]
    InvitationErr(#[from] InvitationError),

    /// Unexpected internal failure, see `InternalError`.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with existing state, such as a duplicate name.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For domain errors, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::InvitationErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `{"error": message}` response with the given status.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
