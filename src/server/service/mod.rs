//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, booking lifecycle rules and availability projection
//! - **Orchestration**: Coordinating repository calls and outgoing email
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Conflict checks and writes that must commit together

pub mod amenity;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod invitation;
pub mod notification;
pub mod password;
pub mod room;
pub mod room_type;
pub mod user;

#[cfg(test)]
mod test;
