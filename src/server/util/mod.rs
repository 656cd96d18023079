pub mod amenity_icon;
pub mod parse;
