use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// An isolated test environment.
///
/// The database is an in-memory SQLite instance created on first use. The session shares that
/// database for its store so guards and services see the same data.
pub struct TestContext {
    /// Connection to the in-memory database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting on first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        Ok(self.db.as_ref().expect("database initialized above"))
    }

    /// Executes CREATE TABLE statements in order. Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the session table and a fresh session on first call.
    ///
    /// Sessions expire after seven days of inactivity, matching the server configuration.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().expect("session initialized above"))
    }

    /// Returns both the database and the session, initializing whichever is missing.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((
            self.db.as_ref().expect("database initialized above"),
            self.session.as_ref().expect("session initialized above"),
        ))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
