pub use super::amenity::Entity as Amenity;
pub use super::booking::Entity as Booking;
pub use super::invitation::Entity as Invitation;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::user::Entity as User;
