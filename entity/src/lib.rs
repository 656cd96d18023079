//! SeaORM entities for the hotel booking backend.
//!
//! Each module maps one table. Closed enumerations (roles, account status, room availability,
//! booking status, invite roles) are stored as strings through `DeriveActiveEnum` so the
//! database holds the same upper-case names the API exposes. Free-form string lists (room
//! amenities, room type image URLs) are JSON array columns through [`StringList`].

pub mod prelude;

pub mod amenity;
pub mod booking;
pub mod invitation;
pub mod room;
pub mod room_type;
pub mod string_list;
pub mod user;

pub use string_list::StringList;
