//! Room type domain models and parameters.

use crate::model::room_type::{
    CreateRoomTypeDto, PaginatedRoomTypesDto, RoomTypeDto, UpdateRoomTypeDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub price_per_night: i64,
    pub description: String,
    pub max_adults: i32,
    pub max_children: i32,
    pub max_persons: i32,
    pub image_urls: Vec<String>,
    pub is_active: bool,
}

impl RoomType {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price_per_night: entity.price_per_night,
            description: entity.description,
            max_adults: entity.max_adults,
            max_children: entity.max_children,
            max_persons: entity.max_persons,
            image_urls: entity.image_urls.into_inner(),
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            id: self.id,
            name: self.name,
            price_per_night: self.price_per_night,
            description: self.description,
            max_adults: self.max_adults,
            max_children: self.max_children,
            max_persons: self.max_persons,
            image_urls: self.image_urls,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParams {
    pub name: String,
    pub price_per_night: i64,
    pub description: String,
    pub max_adults: i32,
    pub max_children: i32,
    pub image_urls: Vec<String>,
    pub is_active: bool,
}

impl From<CreateRoomTypeDto> for CreateRoomTypeParams {
    /// Applies the capacity defaults: one adult, no children, active.
    fn from(dto: CreateRoomTypeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            price_per_night: dto.price_per_night,
            description: dto.description.unwrap_or_default(),
            max_adults: dto.max_adults.unwrap_or(1),
            max_children: dto.max_children.unwrap_or(0),
            image_urls: dto.image_urls,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomTypeParams {
    pub id: i32,
    pub name: Option<String>,
    pub price_per_night: Option<i64>,
    pub description: Option<String>,
    pub max_adults: Option<i32>,
    pub max_children: Option<i32>,
    pub image_urls: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl UpdateRoomTypeParams {
    pub fn from_dto(id: i32, dto: UpdateRoomTypeDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            price_per_night: dto.price_per_night,
            description: dto.description,
            max_adults: dto.max_adults,
            max_children: dto.max_children,
            image_urls: dto.image_urls,
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedRoomTypes {
    pub room_types: Vec<RoomType>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedRoomTypes {
    pub fn into_dto(self) -> PaginatedRoomTypesDto {
        PaginatedRoomTypesDto {
            room_types: self.room_types.into_iter().map(RoomType::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
