use sea_orm::DatabaseConnection;

use crate::server::{
    data::{room::RoomRepository, room_type::RoomTypeRepository},
    error::AppError,
    model::{
        pagination::PageRequest,
        room_type::{CreateRoomTypeParams, PaginatedRoomTypes, RoomType, UpdateRoomTypeParams},
    },
};

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Room types sorted by name.
    pub async fn get_paginated(&self, page: PageRequest) -> Result<PaginatedRoomTypes, AppError> {
        let (room_types, total) = RoomTypeRepository::new(self.db)
            .get_paginated(page)
            .await?;

        Ok(PaginatedRoomTypes {
            room_types,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(total),
        })
    }

    pub async fn get(&self, id: i32) -> Result<RoomType, AppError> {
        RoomTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))
    }

    /// Creates a room type with a name unique after normalization.
    ///
    /// # Returns
    /// - `Ok(RoomType)` - The created room type
    /// - `Err(AppError::BadRequest)` - Empty name, negative price or capacity
    /// - `Err(AppError::Conflict)` - Name already used
    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, AppError> {
        validate_fields(
            Some(&params.name),
            Some(params.price_per_night),
            Some(params.max_adults),
            Some(params.max_children),
        )?;

        let repo = RoomTypeRepository::new(self.db);
        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict("Room type already exists".to_string()));
        }

        let room_type = repo.create(params).await?;

        tracing::info!(room_type_id = room_type.id, name = %room_type.name, "Room type created");

        Ok(room_type)
    }

    /// # Returns
    /// - `Ok(RoomType)` - The updated room type
    /// - `Err(AppError::NotFound)` - No such room type
    /// - `Err(AppError::BadRequest)` - Empty name, negative price or capacity
    /// - `Err(AppError::Conflict)` - New name used by another room type
    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<RoomType, AppError> {
        validate_fields(
            params.name.as_deref(),
            params.price_per_night,
            params.max_adults,
            params.max_children,
        )?;

        let repo = RoomTypeRepository::new(self.db);
        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(params.id)).await? {
                return Err(AppError::Conflict("Room type already exists".to_string()));
            }
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))
    }

    /// Deletes a room type no room refers to.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::Conflict)` - Rooms still use the type
    /// - `Err(AppError::NotFound)` - No such room type
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rooms = RoomRepository::new(self.db).count_by_room_type(id).await?;
        if rooms > 0 {
            return Err(AppError::Conflict(format!(
                "Room type is used by {} room(s)",
                rooms
            )));
        }

        if !RoomTypeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }

        tracing::info!(room_type_id = id, "Room type deleted");

        Ok(())
    }
}

fn validate_fields(
    name: Option<&str>,
    price_per_night: Option<i64>,
    max_adults: Option<i32>,
    max_children: Option<i32>,
) -> Result<(), AppError> {
    if name.is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::BadRequest("Room type name is required".to_string()));
    }
    if price_per_night.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest(
            "Price per night cannot be negative".to_string(),
        ));
    }
    if max_adults.is_some_and(|a| a < 1) {
        return Err(AppError::BadRequest(
            "A room type must allow at least one adult".to_string(),
        ));
    }
    if max_children.is_some_and(|c| c < 0) {
        return Err(AppError::BadRequest(
            "Maximum children cannot be negative".to_string(),
        ));
    }

    Ok(())
}
