use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomType::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomType::Id))
                    .col(string_uniq(RoomType::Name))
                    .col(big_integer(RoomType::PricePerNight))
                    .col(text(RoomType::Description))
                    .col(integer(RoomType::MaxAdults).default(1))
                    .col(integer(RoomType::MaxChildren).default(0))
                    .col(integer(RoomType::MaxPersons))
                    .col(json(RoomType::ImageUrls).default("[]"))
                    .col(boolean(RoomType::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(RoomType::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomType {
    Table,
    Id,
    Name,
    PricePerNight,
    Description,
    MaxAdults,
    MaxChildren,
    MaxPersons,
    ImageUrls,
    IsActive,
    CreatedAt,
}
