use sea_orm::DatabaseConnection;

use crate::server::{
    data::amenity::AmenityRepository,
    error::AppError,
    model::{
        amenity::{Amenity, CreateAmenityParams, PaginatedAmenities, UpdateAmenityParams},
        pagination::PageRequest,
    },
    util::amenity_icon::icon_for,
};

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<PaginatedAmenities, AppError> {
        let (amenities, total) = AmenityRepository::new(self.db)
            .get_paginated(page)
            .await?;

        Ok(PaginatedAmenities {
            amenities,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(total),
        })
    }

    /// Creates an amenity, deriving its icon from the name.
    ///
    /// # Returns
    /// - `Ok(Amenity)` - The created amenity
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::Conflict)` - Name already used once normalized
    pub async fn create(&self, name: &str, description: String) -> Result<Amenity, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Amenity name is required".to_string()));
        }

        let repo = AmenityRepository::new(self.db);
        if repo.name_taken(name, None).await? {
            return Err(AppError::Conflict("Amenity already exists".to_string()));
        }

        let amenity = repo
            .create(CreateAmenityParams {
                name: name.to_string(),
                description: description.trim().to_string(),
                icon: icon_for(name).to_string(),
            })
            .await?;

        tracing::info!(amenity_id = amenity.id, name = %amenity.name, "Amenity created");

        Ok(amenity)
    }

    /// Renaming re-derives the icon.
    ///
    /// # Returns
    /// - `Ok(Amenity)` - The updated amenity
    /// - `Err(AppError::NotFound)` - No such amenity
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::Conflict)` - New name used by another amenity
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Amenity, AppError> {
        let name = name.map(|n| n.trim().to_string());
        let repo = AmenityRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Amenity not found".to_string()));
        }

        if let Some(name) = &name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Amenity name is required".to_string()));
            }
            if repo.name_taken(name, Some(id)).await? {
                return Err(AppError::Conflict("Amenity already exists".to_string()));
            }
        }

        let icon = name.as_deref().map(|n| icon_for(n).to_string());

        repo.update(UpdateAmenityParams {
            id,
            name,
            description: description.map(|d| d.trim().to_string()),
            icon,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AmenityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Amenity not found".to_string()));
        }

        Ok(())
    }
}
