//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs derive `Serialize`/`Deserialize` for the wire and `ToSchema` for the generated
//! OpenAPI document. Server-side domain models convert into these at the controller boundary.

pub mod amenity;
pub mod api;
pub mod availability;
pub mod booking;
pub mod invitation;
pub mod room;
pub mod room_type;
pub mod user;
