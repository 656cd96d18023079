use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test needs, in foreign key order, then call `build()`.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Invitation)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of `entity` to the schema, generated with the SQLite backend.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the room catalog tables: RoomType, Room.
    pub fn with_room_tables(self) -> Self {
        self.with_table(RoomType).with_table(Room)
    }

    /// Adds everything the booking lifecycle touches: User, RoomType, Room, Booking.
    ///
    /// Use this for availability queries and booking creation or status transitions.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User).with_room_tables().with_table(Booking)
    }

    /// Adds the tables used by the staff invitation workflow: User, Invitation.
    pub fn with_invitation_tables(self) -> Self {
        self.with_table(User).with_table(Invitation)
    }

    /// Creates the database and executes every queued CREATE TABLE statement.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables in place
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
