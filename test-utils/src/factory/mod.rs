//! Factories inserting test rows with sensible defaults.
//!
//! Each entity has a `*Factory` builder for customized rows and a `create_*` shorthand for the
//! defaults. Foreign keys are passed explicitly; `helpers` creates common dependency chains.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guest = factory::user::create_guest(db).await?;
//! let (room_type, room) = factory::helpers::create_room_with_type(db).await?;
//!
//! let booking = factory::booking::BookingFactory::new(db, room.id)
//!     .guest(&guest)
//!     .dates(check_in, check_out)
//!     .status(BookingStatus::Confirmed)
//!     .build()
//!     .await?;
//! ```

pub mod amenity;
pub mod booking;
pub mod helpers;
pub mod invitation;
pub mod room;
pub mod room_type;
pub mod user;

pub use amenity::create_amenity;
pub use booking::create_booking;
pub use invitation::create_invitation;
pub use room::create_room;
pub use room_type::create_room_type;
pub use user::{create_admin, create_guest, create_receptionist, create_user};
