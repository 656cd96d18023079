//! Hoterra Test Utils
//!
//! Shared testing utilities for the hotel booking backend. Tests build an isolated in-memory
//! SQLite database with only the tables they need, then seed it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder choosing which entity tables to create
//! - **TestContext**: the built environment (database connection, lazily created session)
//! - **factory**: builders inserting rows with sensible defaults
//! - **TestError**: errors raised while setting up the environment
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (room_type, room) = factory::helpers::create_room_with_type(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
