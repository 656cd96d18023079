//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into service parameters and
//! convert the returned domain models back into DTOs. Each handler carries a
//! `#[utoipa::path]` annotation feeding the OpenAPI document served under `/api/docs`.

pub mod amenity;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod invitation;
pub mod room;
pub mod room_type;
pub mod user;
