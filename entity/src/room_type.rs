use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Nightly price in the smallest currency unit.
    pub price_per_night: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub max_adults: i32,
    pub max_children: i32,
    pub max_persons: i32,
    /// Image URLs as a JSON array.
    #[sea_orm(column_type = "Json")]
    pub image_urls: crate::StringList,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
