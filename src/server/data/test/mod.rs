mod booking;
mod invitation;
mod room;
mod room_type;
mod user;
