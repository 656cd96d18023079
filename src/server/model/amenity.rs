//! Amenity domain models and parameters.

use crate::model::amenity::{AmenityDto, PaginatedAmenitiesDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Amenity {
    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
        }
    }

    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAmenityParams {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAmenityParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Set together with `name`.
    pub icon: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaginatedAmenities {
    pub amenities: Vec<Amenity>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedAmenities {
    pub fn into_dto(self) -> PaginatedAmenitiesDto {
        PaginatedAmenitiesDto {
            amenities: self.amenities.into_iter().map(Amenity::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
