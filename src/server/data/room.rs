use entity::{room::RoomAvailability, StringList};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::PageRequest,
    room::{CreateRoomParams, Room, RoomFilter, RoomSort, UpdateRoomParams},
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            room_type_id: ActiveValue::Set(params.room_type_id),
            room_number: ActiveValue::Set(params.room_number),
            floor: ActiveValue::Set(params.floor),
            availability: ActiveValue::Set(RoomAvailability::Available),
            amenities: ActiveValue::Set(StringList::new(&params.amenities)),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets a room together with its room type name.
    pub async fn find_with_type(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let result = entity::prelude::Room::find_by_id(id)
            .find_also_related(entity::prelude::RoomType)
            .one(self.db)
            .await?;

        Ok(result.map(|(room, room_type)| Room::from_entity_with_type(room, room_type)))
    }

    /// Highest room number currently assigned on a floor.
    pub async fn last_number_on_floor(&self, floor: i32) -> Result<Option<i32>, DbErr> {
        let last: Option<i32> = entity::prelude::Room::find()
            .select_only()
            .column(entity::room::Column::RoomNumber)
            .filter(entity::room::Column::Floor.eq(floor))
            .order_by_desc(entity::room::Column::RoomNumber)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(last)
    }

    /// Gets a filtered, sorted page of rooms with their room type names.
    pub async fn get_filtered_paginated(
        &self,
        filter: &RoomFilter,
    ) -> Result<(Vec<Room>, u64), DbErr> {
        let mut query = entity::prelude::Room::find().find_also_related(entity::prelude::RoomType);

        if let Some(floor) = filter.floor {
            query = query.filter(entity::room::Column::Floor.eq(floor));
        }
        if let Some(availability) = filter.availability {
            query = query.filter(entity::room::Column::Availability.eq(availability));
        }
        if let Some(room_type_id) = filter.room_type_id {
            query = query.filter(entity::room::Column::RoomTypeId.eq(room_type_id));
        }

        query = match filter.sort {
            RoomSort::RoomNumberAsc => query.order_by_asc(entity::room::Column::RoomNumber),
            RoomSort::RoomNumberDesc => query.order_by_desc(entity::room::Column::RoomNumber),
        };

        let paginator = query.paginate(self.db, filter.page.limit);
        let total = paginator.num_items().await?;
        let rooms = paginator
            .fetch_page(filter.page.index())
            .await?
            .into_iter()
            .map(|(room, room_type)| Room::from_entity_with_type(room, room_type))
            .collect();

        Ok((rooms, total))
    }

    /// Gets every room whose id is not in `excluded`, ordered by room number.
    pub async fn find_excluding(&self, excluded: Vec<i32>) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find();
        if !excluded.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(excluded));
        }

        let entities = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets a page of one room type's rooms, skipping the ids in `excluded`.
    pub async fn find_by_type_excluding(
        &self,
        room_type_id: i32,
        excluded: Vec<i32>,
        page: PageRequest,
    ) -> Result<(Vec<Room>, u64), DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id));
        if !excluded.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(excluded));
        }

        let paginator = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let rooms = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect();

        Ok((rooms, total))
    }

    pub async fn count_by_room_type(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .count(self.db)
            .await
    }

    /// Applies the fields present in `params`. `room_number` is written when the floor moves.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Updated room
    /// - `Ok(None)` - No room with this id
    pub async fn update(
        &self,
        params: UpdateRoomParams,
        room_number: Option<i32>,
    ) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::room::ActiveModel = room.into();
        if let Some(room_type_id) = params.room_type_id {
            active_model.room_type_id = ActiveValue::Set(room_type_id);
        }
        if let Some(floor) = params.floor {
            active_model.floor = ActiveValue::Set(floor);
        }
        if let Some(room_number) = room_number {
            active_model.room_number = ActiveValue::Set(room_number);
        }
        if let Some(availability) = params.availability {
            active_model.availability = ActiveValue::Set(availability);
        }
        if let Some(amenities) = params.amenities {
            active_model.amenities = ActiveValue::Set(StringList::new(amenities));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Room::from_entity(entity)))
    }

    /// Writes the availability state of a room.
    pub async fn set_availability(
        &self,
        id: i32,
        availability: RoomAvailability,
    ) -> Result<(), DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::Unchanged(id),
            availability: ActiveValue::Set(availability),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
