use entity::StringList;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::{
        pagination::PageRequest,
        room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams},
    },
    util::parse::normalize_name,
};

pub struct RoomTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a room type; max persons is the sum of adult and child capacity.
    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, DbErr> {
        let entity = entity::room_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            price_per_night: ActiveValue::Set(params.price_per_night),
            description: ActiveValue::Set(params.description),
            max_adults: ActiveValue::Set(params.max_adults),
            max_children: ActiveValue::Set(params.max_children),
            max_persons: ActiveValue::Set(params.max_adults + params.max_children),
            image_urls: ActiveValue::Set(StringList::new(&params.image_urls)),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomType>, DbErr> {
        let entity = entity::prelude::RoomType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(RoomType::from_entity))
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<RoomType>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoomType::from_entity).collect())
    }

    /// Gets a page of room types sorted by name.
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<RoomType>, u64), DbErr> {
        let paginator = entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::Name)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let room_types = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(RoomType::from_entity)
            .collect();

        Ok((room_types, total))
    }

    /// Checks whether another room type already uses `name` once normalized.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `exclude_id` - Room type being renamed, ignored in the comparison
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let normalized = normalize_name(name);

        let names: Vec<(i32, String)> = entity::prelude::RoomType::find()
            .select_only()
            .column(entity::room_type::Column::Id)
            .column(entity::room_type::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names
            .into_iter()
            .any(|(id, existing)| Some(id) != exclude_id && normalize_name(&existing) == normalized))
    }

    /// Applies the fields present in `params`, re-deriving max persons.
    ///
    /// # Returns
    /// - `Ok(Some(RoomType))` - Updated room type
    /// - `Ok(None)` - No room type with this id
    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<Option<RoomType>, DbErr> {
        let Some(room_type) = entity::prelude::RoomType::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let max_adults = params.max_adults.unwrap_or(room_type.max_adults);
        let max_children = params.max_children.unwrap_or(room_type.max_children);

        let mut active_model: entity::room_type::ActiveModel = room_type.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = params.price_per_night {
            active_model.price_per_night = ActiveValue::Set(price);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(image_urls) = params.image_urls {
            active_model.image_urls = ActiveValue::Set(StringList::new(image_urls));
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.max_adults = ActiveValue::Set(max_adults);
        active_model.max_children = ActiveValue::Set(max_children);
        active_model.max_persons = ActiveValue::Set(max_adults + max_children);

        let entity = active_model.update(self.db).await?;

        Ok(Some(RoomType::from_entity(entity)))
    }

    /// Deletes a room type, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
