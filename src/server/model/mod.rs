//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed to
//! DTOs at the controller boundary. Parameter types carry validated input into repositories.

pub mod amenity;
pub mod availability;
pub mod booking;
pub mod invitation;
pub mod pagination;
pub mod room;
pub mod room_type;
pub mod user;
