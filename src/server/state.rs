//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Email sender for invitation messages
//! - Application URL for generating registration links

use sea_orm::DatabaseConnection;

use crate::server::service::notification::EmailSender;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `EmailSender` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared across all requests.
    pub db: DatabaseConnection,

    /// Transactional email dispatch, used for staff invitations.
    pub email_sender: EmailSender,

    /// Frontend base URL; registration links are built from it.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `email_sender` - Email sender for invitation messages
    /// - `app_url` - Frontend base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, email_sender: EmailSender, app_url: String) -> Self {
        Self {
            db,
            email_sender,
            app_url,
        }
    }
}
