use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};

use crate::server::{
    model::{
        amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
        pagination::PageRequest,
    },
    util::parse::normalize_name,
};

pub struct AmenityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AmenityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, DbErr> {
        let entity = entity::amenity::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(params.icon),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Amenity::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Amenity>, DbErr> {
        let entity = entity::prelude::Amenity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Amenity::from_entity))
    }

    /// Gets a page of amenities sorted by name.
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Amenity>, u64), DbErr> {
        let paginator = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Name)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let amenities = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Amenity::from_entity)
            .collect();

        Ok((amenities, total))
    }

    /// Checks whether another amenity already uses `name` once normalized.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let normalized = normalize_name(name);

        let names: Vec<(i32, String)> = entity::prelude::Amenity::find()
            .select_only()
            .column(entity::amenity::Column::Id)
            .column(entity::amenity::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names
            .into_iter()
            .any(|(id, existing)| Some(id) != exclude_id && normalize_name(&existing) == normalized))
    }

    pub async fn update(&self, params: UpdateAmenityParams) -> Result<Option<Amenity>, DbErr> {
        let Some(amenity) = entity::prelude::Amenity::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::amenity::ActiveModel = amenity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(icon) = params.icon {
            active_model.icon = ActiveValue::Set(icon);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Amenity::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Amenity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
