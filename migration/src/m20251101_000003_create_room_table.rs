use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000002_create_room_type_table::RoomType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::RoomTypeId))
                    .col(integer_uniq(Room::RoomNumber))
                    .col(integer(Room::Floor))
                    .col(string_len(Room::Availability, 24).default("AVAILABLE"))
                    .col(json(Room::Amenities).default("[]"))
                    .col(
                        timestamp_with_time_zone(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type_id")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_floor")
                    .table(Room::Table)
                    .col(Room::Floor)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomTypeId,
    RoomNumber,
    Floor,
    Availability,
    Amenities,
    CreatedAt,
}
