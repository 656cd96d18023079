use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amenity::Table)
                    .if_not_exists()
                    .col(pk_auto(Amenity::Id))
                    .col(string_uniq(Amenity::Name))
                    .col(text(Amenity::Description))
                    .col(string(Amenity::Icon))
                    .col(
                        timestamp_with_time_zone(Amenity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Amenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Amenity {
    Table,
    Id,
    Name,
    Description,
    Icon,
    CreatedAt,
}
